pub use super::character::Entity as Character;
pub use super::character_history::Entity as CharacterHistory;
