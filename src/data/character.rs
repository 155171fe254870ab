//! Character data repository for database operations.

use entity::character::name_key;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::{
    model::character::{Character, RecordObservationParam},
    util::parse::u32_to_column,
};

/// Repository providing database operations for tracked characters.
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new CharacterRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a character by its folded name key.
    ///
    /// Letter case (including non-ASCII capitals) and surrounding whitespace are ignored.
    ///
    /// # Arguments
    /// - `name` - Character name in any letter case
    ///
    /// # Returns
    /// - `Ok(Some(Character))` - Character found
    /// - `Ok(None)` - No character with a matching name
    /// - `Err(DbErr)` - Database error, or the stored row is malformed
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Character>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::NameKey.eq(name_key(name)))
            .one(self.db)
            .await?
            .map(Character::from_entity)
            .transpose()
    }

    /// Inserts a new character from an observation.
    ///
    /// # Returns
    /// - `Ok(Character)` - Inserted character, including its generated id
    /// - `Err(DbErr)` - Database error, e.g. a duplicate name
    pub async fn create(&self, param: &RecordObservationParam) -> Result<Character, DbErr> {
        let model = entity::character::ActiveModel {
            name: ActiveValue::Set(param.name.clone()),
            name_key: ActiveValue::Set(name_key(&param.name)),
            guild: ActiveValue::Set(param.guild.clone()),
            last_level: ActiveValue::Set(level_column(param.level)?),
            last_resets: ActiveValue::Set(resets_column(param.resets)?),
            last_seen: ActiveValue::Set(param.observed_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Character::from_entity(model)
    }

    /// Overwrites the stored state of an existing character with a newer observation.
    ///
    /// The name is replaced too, so the stored spelling follows the ranking page.
    ///
    /// # Arguments
    /// - `id` - Id of the character to update
    /// - `param` - The observation to store
    ///
    /// # Returns
    /// - `Ok(Character)` - Updated character
    /// - `Err(DbErr::RecordNotUpdated)` - No character with that id
    /// - `Err(DbErr)` - Other database error
    pub async fn update(
        &self,
        id: i32,
        param: &RecordObservationParam,
    ) -> Result<Character, DbErr> {
        let model = entity::character::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(param.name.clone()),
            name_key: ActiveValue::Set(name_key(&param.name)),
            guild: ActiveValue::Set(param.guild.clone()),
            last_level: ActiveValue::Set(level_column(param.level)?),
            last_resets: ActiveValue::Set(resets_column(param.resets)?),
            last_seen: ActiveValue::Set(param.observed_at),
        }
        .update(self.db)
        .await?;

        Character::from_entity(model)
    }
}

fn level_column(level: u32) -> Result<i32, DbErr> {
    u32_to_column("last_level", level).map_err(|e| DbErr::Custom(e.to_string()))
}

fn resets_column(resets: u32) -> Result<i32, DbErr> {
    u32_to_column("last_resets", resets).map_err(|e| DbErr::Custom(e.to_string()))
}
