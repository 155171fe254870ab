//! Character domain models and parameters.
//!
//! `Character` is the last known state of a ranked game character, `CharacterHistoryEntry`
//! is one confirmed observation, and `ScrapeResult` is a transient match read from a
//! ranking page.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::util::parse::u32_from_column;

/// Last known state of a tracked character.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    /// Character name as it appeared on the ranking page.
    pub name: String,
    /// Guild the character was last seen in.
    pub guild: String,
    pub last_level: u32,
    pub last_resets: u32,
    /// Time of the most recent confirmed observation.
    pub last_seen: DateTime<Utc>,
}

impl Character {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Character)` - Row is well formed
    /// - `Err(DbErr::Custom)` - Stored level or resets is negative
    pub fn from_entity(entity: entity::character::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            guild: entity.guild,
            last_level: u32_from_column("last_level", entity.last_level)
                .map_err(|e| DbErr::Custom(e.to_string()))?,
            last_resets: u32_from_column("last_resets", entity.last_resets)
                .map_err(|e| DbErr::Custom(e.to_string()))?,
            last_seen: entity.last_seen,
        })
    }
}

/// One confirmed observation of a character.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterHistoryEntry {
    pub id: i32,
    pub character_id: i32,
    pub level: u32,
    pub resets: u32,
    pub recorded_at: DateTime<Utc>,
}

impl CharacterHistoryEntry {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(CharacterHistoryEntry)` - Row is well formed
    /// - `Err(DbErr::Custom)` - Stored level or resets is negative
    pub fn from_entity(entity: entity::character_history::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            character_id: entity.character_id,
            level: u32_from_column("level", entity.level)
                .map_err(|e| DbErr::Custom(e.to_string()))?,
            resets: u32_from_column("resets", entity.resets)
                .map_err(|e| DbErr::Custom(e.to_string()))?,
            recorded_at: entity.recorded_at,
        })
    }
}

/// A matching row read from a guild ranking page.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeResult {
    pub name: String,
    pub level: u32,
    pub resets: u32,
    /// Guild identifier of the page the row was found on.
    pub guild: String,
    pub observed_at: DateTime<Utc>,
}

/// Parameters for recording a fresh observation of a character.
#[derive(Debug, Clone)]
pub struct RecordObservationParam {
    pub name: String,
    pub guild: String,
    pub level: u32,
    pub resets: u32,
    pub observed_at: DateTime<Utc>,
}

impl From<ScrapeResult> for RecordObservationParam {
    fn from(result: ScrapeResult) -> Self {
        Self {
            name: result.name,
            guild: result.guild,
            level: result.level,
            resets: result.resets,
            observed_at: result.observed_at,
        }
    }
}

/// Where a character lookup got its answer from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupSource {
    /// Stored record was younger than the cache TTL; no network call was made.
    Cached,
    /// A ranking page matched and the record was refreshed.
    Fresh,
    /// No ranking page matched; the previously stored record is returned as is.
    Stale,
}

/// Result of a character lookup together with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterLookup {
    pub character: Character,
    pub source: LookupSource,
}
