//! Character history repository.
//!
//! History is append-only: rows are inserted once per fresh observation and only read
//! back for trend calculation and recent-progress listings.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{model::character::CharacterHistoryEntry, util::parse::u32_to_column};

pub struct CharacterHistoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterHistoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends one observation to a character's history.
    ///
    /// # Arguments
    /// - `character_id` - Id of the observed character
    /// - `level` - Observed level
    /// - `resets` - Observed reset count
    /// - `recorded_at` - Observation time
    ///
    /// # Returns
    /// - `Ok(CharacterHistoryEntry)` - Inserted entry with its generated id
    /// - `Err(DbErr)` - Database error, or a value exceeds the column range
    pub async fn create(
        &self,
        character_id: i32,
        level: u32,
        resets: u32,
        recorded_at: DateTime<Utc>,
    ) -> Result<CharacterHistoryEntry, DbErr> {
        let level = u32_to_column("level", level).map_err(|e| DbErr::Custom(e.to_string()))?;
        let resets = u32_to_column("resets", resets).map_err(|e| DbErr::Custom(e.to_string()))?;

        let model = entity::character_history::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            level: ActiveValue::Set(level),
            resets: ActiveValue::Set(resets),
            recorded_at: ActiveValue::Set(recorded_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        CharacterHistoryEntry::from_entity(model)
    }

    /// Gets every entry recorded at or after `since`, oldest first.
    ///
    /// Entries sharing a timestamp keep insertion order.
    ///
    /// # Returns
    /// - `Ok(Vec<CharacterHistoryEntry>)` - Entries in chronological order (may be empty)
    /// - `Err(DbErr)` - Database error, or a stored row is malformed
    pub async fn get_since(
        &self,
        character_id: i32,
        since: DateTime<Utc>,
    ) -> Result<Vec<CharacterHistoryEntry>, DbErr> {
        entity::prelude::CharacterHistory::find()
            .filter(entity::character_history::Column::CharacterId.eq(character_id))
            .filter(entity::character_history::Column::RecordedAt.gte(since))
            .order_by_asc(entity::character_history::Column::RecordedAt)
            .order_by_asc(entity::character_history::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(CharacterHistoryEntry::from_entity)
            .collect()
    }

    /// Gets the entries recorded within the last `days` days, oldest first.
    pub async fn get_recent_days(
        &self,
        character_id: i32,
        days: i64,
    ) -> Result<Vec<CharacterHistoryEntry>, DbErr> {
        self.get_since(character_id, Utc::now() - Duration::days(days))
            .await
    }

    /// Gets the newest `limit` entries, newest first.
    pub async fn get_recent(
        &self,
        character_id: i32,
        limit: u64,
    ) -> Result<Vec<CharacterHistoryEntry>, DbErr> {
        entity::prelude::CharacterHistory::find()
            .filter(entity::character_history::Column::CharacterId.eq(character_id))
            .order_by_desc(entity::character_history::Column::RecordedAt)
            .order_by_desc(entity::character_history::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(CharacterHistoryEntry::from_entity)
            .collect()
    }
}
