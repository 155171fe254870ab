//! Service layer containing the character tracking logic.
//!
//! - `ranking` fetches and scans guild ranking pages (GuildScraper, ParallelLookup)
//! - `character` serves character lookups through a time-boxed cache backed by the database
//! - `trend` derives progress statistics from a character's history
//!
//! Services borrow the database connection and the shared lookup from `AppState` per call.

pub mod character;
pub mod ranking;
pub mod trend;
