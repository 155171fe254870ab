//! Character history factory for creating test history rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test history entries for an existing character.
pub struct CharacterHistoryFactory<'a> {
    db: &'a DatabaseConnection,
    character_id: i32,
    level: i32,
    resets: i32,
    recorded_at: DateTime<Utc>,
}

impl<'a> CharacterHistoryFactory<'a> {
    /// Creates a new factory for the given character.
    ///
    /// Defaults:
    /// - level: `1`
    /// - resets: `0`
    /// - recorded_at: now
    pub fn new(db: &'a DatabaseConnection, character_id: i32) -> Self {
        Self {
            db,
            character_id,
            level: 1,
            resets: 0,
            recorded_at: Utc::now(),
        }
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn resets(mut self, resets: i32) -> Self {
        self.resets = resets;
        self
    }

    pub fn recorded_at(mut self, recorded_at: DateTime<Utc>) -> Self {
        self.recorded_at = recorded_at;
        self
    }

    /// Builds and inserts the history row.
    ///
    /// # Returns
    /// - `Ok(entity::character_history::Model)` - Created history row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::character_history::Model, DbErr> {
        entity::character_history::ActiveModel {
            character_id: ActiveValue::Set(self.character_id),
            level: ActiveValue::Set(self.level),
            resets: ActiveValue::Set(self.resets),
            recorded_at: ActiveValue::Set(self.recorded_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a history entry with default values for the given character.
pub async fn create_history_entry(
    db: &DatabaseConnection,
    character_id: i32,
) -> Result<entity::character_history::Model, DbErr> {
    CharacterHistoryFactory::new(db, character_id).build().await
}
