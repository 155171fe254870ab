//! Resetboard Test Utils
//!
//! Shared testing utilities for the resetboard crates. Provides a builder for test contexts
//! backed by in-memory SQLite databases, plus factories for inserting character rows.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Character;
//!
//! #[tokio::test]
//! async fn test_character_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Character)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
