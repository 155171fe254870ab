//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let character = factory::character::CharacterFactory::new(&db)
//!     .name("DarkLord")
//!     .guild("Legion")
//!     .last_level(350)
//!     .build()
//!     .await?;
//!
//! factory::character_history::CharacterHistoryFactory::new(&db, character.id)
//!     .level(360)
//!     .build()
//!     .await?;
//! ```

pub mod character;
pub mod character_history;
pub mod helpers;

pub use character::create_character;
pub use character_history::create_history_entry;
