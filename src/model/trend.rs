use crate::model::character::{Character, CharacterHistoryEntry};

/// Projection of the time needed to reach the target level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LevelProjection {
    /// The latest observation is already at or above the target level.
    AlreadyReached,
    /// Estimated hours until the target level is reached.
    Hours(f64),
}

/// Progress statistics derived from a character's recent history.
///
/// Recomputed on every request and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendStats {
    /// Number of history entries the statistics were derived from.
    pub sample_count: usize,
    pub latest_level: u32,
    pub latest_resets: u32,
    /// Mean level change per hour over consecutive entries with positive elapsed time.
    pub level_per_hour: f64,
    /// Mean elapsed days across entry pairs in which the reset counter increased.
    pub avg_days_per_reset: Option<f64>,
    /// Hours needed for one more level at `level_per_hour`.
    pub next_level_hours: Option<f64>,
    pub projection_to_target: Option<LevelProjection>,
    /// Estimated days until the next reset.
    pub projection_next_reset_days: Option<f64>,
}

/// Everything the progress view shows for one character.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterProgress {
    pub character: Character,
    /// `None` while fewer than two observations fall inside the trend window.
    pub stats: Option<TrendStats>,
    /// Latest observations, newest first.
    pub recent: Vec<CharacterHistoryEntry>,
}
