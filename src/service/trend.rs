//! Progress statistics over a character's recent history.
//!
//! Statistics are derived from consecutive pairs of history entries. Pairs whose elapsed
//! time or level gain would make a rate meaningless are left out of the affected average
//! instead of producing NaN.

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    data::{character::CharacterRepository, character_history::CharacterHistoryRepository},
    model::{
        character::CharacterHistoryEntry,
        trend::{CharacterProgress, LevelProjection, TrendStats},
    },
};

/// History window the statistics are computed over.
pub const TREND_WINDOW_DAYS: i64 = 30;

/// Level a character has to reach before it can reset.
pub const TARGET_LEVEL: u32 = 400;

/// Number of latest observations listed alongside the statistics.
pub const RECENT_ENTRY_LIMIT: u64 = 5;

const MS_PER_HOUR: f64 = 3_600_000.0;

pub struct TrendService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrendService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes trend statistics for a character.
    ///
    /// Database failures are logged and reported as `None`.
    ///
    /// # Returns
    /// - `Some(TrendStats)` - At least two entries in the window
    /// - `None` - Fewer than two entries, or the database failed
    pub async fn get_trend(&self, character_id: i32) -> Option<TrendStats> {
        match self.try_get_trend(character_id).await {
            Ok(stats) => stats,
            Err(e) => {
                tracing::error!(
                    "Failed to compute trend for character {}: {}",
                    character_id,
                    e
                );
                None
            }
        }
    }

    /// Computes trend statistics for a character, propagating database errors.
    pub async fn try_get_trend(&self, character_id: i32) -> Result<Option<TrendStats>, DbErr> {
        let entries = CharacterHistoryRepository::new(self.db)
            .get_recent_days(character_id, TREND_WINDOW_DAYS)
            .await?;

        Ok(calculate_trend_stats(&entries))
    }

    /// Gathers the progress view of a character stored under `name` in any letter case.
    ///
    /// Only stored data is read; no ranking search is made. A failure while computing the
    /// statistics is logged and leaves them absent.
    ///
    /// # Returns
    /// - `Ok(Some(CharacterProgress))` - Character is stored; statistics may still be absent
    /// - `Ok(None)` - No character stored under that name
    /// - `Err(DbErr)` - Database error
    pub async fn get_progress(&self, name: &str) -> Result<Option<CharacterProgress>, DbErr> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        let Some(character) = CharacterRepository::new(self.db)
            .find_by_name(name)
            .await?
        else {
            return Ok(None);
        };

        let stats = self.get_trend(character.id).await;
        let recent = CharacterHistoryRepository::new(self.db)
            .get_recent(character.id, RECENT_ENTRY_LIMIT)
            .await?;

        Ok(Some(CharacterProgress {
            character,
            stats,
            recent,
        }))
    }
}

/// Derives trend statistics from history entries ordered oldest first.
///
/// For every consecutive pair the elapsed hours, level delta and reset delta are taken:
/// - `level_per_hour` averages `level_delta / hours` over pairs with positive elapsed time,
///   so pairs spanning a reset pull the average down.
/// - `avg_days_per_reset` averages elapsed days over pairs whose reset counter increased.
/// - `projection_to_target` averages `(TARGET_LEVEL - start_level) / rate` over pairs that
///   start below the target and gained levels, unless the latest entry already reached it.
/// - `projection_next_reset_days` is `avg_days_per_reset`, plus the projection to the
///   target (in days) while the latest entry is still below it.
///
/// # Returns
/// - `Some(TrendStats)` - At least two entries were given
/// - `None` - Fewer than two entries
pub fn calculate_trend_stats(entries: &[CharacterHistoryEntry]) -> Option<TrendStats> {
    if entries.len() < 2 {
        return None;
    }
    let latest = entries.last()?;

    let mut level_rates = Vec::new();
    let mut reset_days = Vec::new();
    let mut hours_to_target = Vec::new();

    for pair in entries.windows(2) {
        let (start, end) = (&pair[0], &pair[1]);

        let elapsed_hours =
            (end.recorded_at - start.recorded_at).num_milliseconds() as f64 / MS_PER_HOUR;
        let level_delta = f64::from(end.level) - f64::from(start.level);
        let reset_delta = i64::from(end.resets) - i64::from(start.resets);

        if elapsed_hours > 0.0 {
            let rate = level_delta / elapsed_hours;
            level_rates.push(rate);

            if start.level < TARGET_LEVEL && level_delta > 0.0 {
                hours_to_target.push(f64::from(TARGET_LEVEL - start.level) / rate);
            }
        }

        if reset_delta > 0 {
            reset_days.push(elapsed_hours / 24.0);
        }
    }

    let level_per_hour = mean(&level_rates).unwrap_or(0.0);
    let next_level_hours = (level_per_hour > 0.0).then(|| 1.0 / level_per_hour);

    let projection_to_target = if latest.level >= TARGET_LEVEL {
        Some(LevelProjection::AlreadyReached)
    } else {
        mean(&hours_to_target).map(LevelProjection::Hours)
    };

    let avg_days_per_reset = mean(&reset_days);
    let projection_next_reset_days = avg_days_per_reset.map(|days| match projection_to_target {
        Some(LevelProjection::Hours(hours)) if latest.level < TARGET_LEVEL => days + hours / 24.0,
        _ => days,
    });

    Some(TrendStats {
        sample_count: entries.len(),
        latest_level: latest.level,
        latest_resets: latest.resets,
        level_per_hour,
        avg_days_per_reset,
        next_level_hours,
        projection_to_target,
        projection_next_reset_days,
    })
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
