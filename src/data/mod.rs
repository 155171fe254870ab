//! Database repository layer.
//!
//! Repositories wrap SeaORM queries and return domain models from `crate::model`. They are
//! generic over `ConnectionTrait` so the same code runs on a pooled connection or inside a
//! transaction.

pub mod character;
pub mod character_history;

#[cfg(test)]
mod test;
