//! Shared helper utilities for factory methods.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::character_history::CharacterHistoryFactory;

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Inserts a history series for a character.
///
/// Each tuple is `(level, resets, hours_after_start)`, with `start` as the reference time.
/// Entries are inserted in the order given.
///
/// # Arguments
/// - `db` - Database connection
/// - `character_id` - Id of the character the entries belong to
/// - `start` - Timestamp that `hours_after_start` is measured from
/// - `points` - `(level, resets, hours_after_start)` tuples
///
/// # Returns
/// - `Ok(Vec<Model>)` - Inserted history rows
/// - `Err(DbErr)` - Database error during insert
pub async fn create_history_series(
    db: &DatabaseConnection,
    character_id: i32,
    start: DateTime<Utc>,
    points: &[(i32, i32, i64)],
) -> Result<Vec<entity::character_history::Model>, DbErr> {
    let mut entries = Vec::with_capacity(points.len());

    for &(level, resets, hours) in points {
        let entry = CharacterHistoryFactory::new(db, character_id)
            .level(level)
            .resets(resets)
            .recorded_at(start + Duration::hours(hours))
            .build()
            .await?;
        entries.push(entry);
    }

    Ok(entries)
}
