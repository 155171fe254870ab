//! Character lookups with a time-boxed cache.
//!
//! A stored character younger than `CACHE_TTL_MS` is returned without touching the network.
//! Otherwise the guild rankings are searched; a match refreshes the stored character and
//! appends a history entry, while a miss falls back to whatever was stored before.
//!
//! Concurrent lookups of the same stale name are not coalesced: each one runs its own
//! ranking search.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    data::{character::CharacterRepository, character_history::CharacterHistoryRepository},
    model::character::{Character, CharacterLookup, LookupSource, RecordObservationParam},
    service::ranking::ParallelLookup,
};

/// How long a stored observation is served without a fresh ranking search.
pub const CACHE_TTL_MS: i64 = 300_000;

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
    lookup: &'a ParallelLookup,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection, lookup: &'a ParallelLookup) -> Self {
        Self { db, lookup }
    }

    /// Looks a character up, preferring a recent stored observation.
    ///
    /// Database failures are logged and reported as `None` so the caller can degrade to a
    /// "not found" answer.
    ///
    /// # Arguments
    /// - `name` - Character name as typed by the user
    ///
    /// # Returns
    /// - `Some(CharacterLookup)` - Cached, freshly scraped or stale character
    /// - `None` - Character was never seen, or the database failed
    pub async fn lookup(&self, name: &str) -> Option<CharacterLookup> {
        match self.try_lookup(name, Utc::now()).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Failed to look up character {}: {}", name, e);
                None
            }
        }
    }

    /// Looks a character up as of `now`, propagating database errors.
    ///
    /// The name is trimmed and matched against stored characters ignoring letter case, so
    /// any spelling of a recently seen character is a cache hit. A blank name finds nothing.
    ///
    /// # Returns
    /// - `Ok(Some(CharacterLookup))` - Cached, freshly scraped or stale character
    /// - `Ok(None)` - Character is neither stored nor listed on any ranking page
    /// - `Err(DbErr)` - Reading or writing the stored character failed
    pub async fn try_lookup(
        &self,
        name: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<CharacterLookup>, DbErr> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        let repo = CharacterRepository::new(self.db);
        let stored = repo.find_by_name(name).await?;

        if let Some(character) = &stored {
            if is_fresh(character.last_seen, now) {
                tracing::debug!("Cache hit for {}", name);
                return Ok(Some(CharacterLookup {
                    character: character.clone(),
                    source: LookupSource::Cached,
                }));
            }
        }

        match self.lookup.search(name).await {
            Some(result) => {
                let character = self.record_observation(result.into()).await?;
                Ok(Some(CharacterLookup {
                    character,
                    source: LookupSource::Fresh,
                }))
            }
            None => Ok(stored.map(|character| CharacterLookup {
                character,
                source: LookupSource::Stale,
            })),
        }
    }

    /// Stores a fresh observation: upserts the character and appends one history entry.
    ///
    /// Both writes share one transaction, so a failure leaves neither behind. The existing
    /// character is matched ignoring letter case.
    ///
    /// # Returns
    /// - `Ok(Character)` - The stored character after the update
    /// - `Err(DbErr)` - Either write failed; the transaction was rolled back
    pub async fn record_observation(
        &self,
        param: RecordObservationParam,
    ) -> Result<Character, DbErr> {
        let txn = self.db.begin().await?;

        let character_repo = CharacterRepository::new(&txn);
        let character = match character_repo
            .find_by_name(&param.name)
            .await?
        {
            Some(existing) => character_repo.update(existing.id, &param).await?,
            None => character_repo.create(&param).await?,
        };

        CharacterHistoryRepository::new(&txn)
            .create(character.id, param.level, param.resets, param.observed_at)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Recorded {} in {} at level {} with {} resets",
            character.name,
            character.guild,
            character.last_level,
            character.last_resets
        );

        Ok(character)
    }
}

/// Whether an observation made at `last_seen` is still within the cache TTL at `now`.
pub fn is_fresh(last_seen: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(last_seen) < Duration::milliseconds(CACHE_TTL_MS)
}
