//! Process context shared by the bot and the HTTP router.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::service::ranking::ParallelLookup;

/// Shared resources built once in `main`.
///
/// Cloning is cheap: the database connection is a pool handle and the lookup sits behind
/// an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Guild ranking search configured with the guild list and HTTP source.
    pub lookup: Arc<ParallelLookup>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, lookup: ParallelLookup) -> Self {
        Self {
            db,
            lookup: Arc::new(lookup),
        }
    }
}
