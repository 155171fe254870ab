use sea_orm::entity::prelude::*;

/// Last known state of a tracked game character.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Spelling from the most recent ranking observation.
    pub name: String,
    /// `name_key(name)`; the identity of a character.
    #[sea_orm(unique)]
    pub name_key: String,
    pub guild: String,
    pub last_level: i32,
    pub last_resets: i32,
    pub last_seen: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::character_history::Entity")]
    CharacterHistory,
}

impl Related<super::character_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CharacterHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Folds a character name into its lookup key: trimmed, full Unicode lowercase.
///
/// Folding happens in Rust rather than with SQLite `LOWER()`, which only folds ASCII.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
