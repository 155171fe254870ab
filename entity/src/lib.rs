//! SeaORM entity definitions for the character tracking tables.

pub mod prelude;

pub mod character;
pub mod character_history;
