//! Character factory for creating test character rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::character::CharacterFactory;
///
/// let character = CharacterFactory::new(&db)
///     .name("DarkLord")
///     .last_seen(Utc::now() - Duration::minutes(10))
///     .build()
///     .await?;
/// ```
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    guild: String,
    last_level: i32,
    last_resets: i32,
    last_seen: DateTime<Utc>,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Character{id}"` where id is auto-incremented
    /// - guild: `"Guild{id}"`
    /// - last_level: `1`
    /// - last_resets: `0`
    /// - last_seen: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Character{}", id),
            guild: format!("Guild{}", id),
            last_level: 1,
            last_resets: 0,
            last_seen: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn guild(mut self, guild: impl Into<String>) -> Self {
        self.guild = guild.into();
        self
    }

    pub fn last_level(mut self, last_level: i32) -> Self {
        self.last_level = last_level;
        self
    }

    pub fn last_resets(mut self, last_resets: i32) -> Self {
        self.last_resets = last_resets;
        self
    }

    /// Sets when the character was last observed; use a past time to make the row stale.
    pub fn last_seen(mut self, last_seen: DateTime<Utc>) -> Self {
        self.last_seen = last_seen;
        self
    }

    /// Builds and inserts the character row.
    ///
    /// # Returns
    /// - `Ok(entity::character::Model)` - Created character row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            name_key: ActiveValue::Set(entity::character::name_key(&self.name)),
            name: ActiveValue::Set(self.name),
            guild: ActiveValue::Set(self.guild),
            last_level: ActiveValue::Set(self.last_level),
            last_resets: ActiveValue::Set(self.last_resets),
            last_seen: ActiveValue::Set(self.last_seen),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
///
/// Shorthand for `CharacterFactory::new(db).build().await`.
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}
