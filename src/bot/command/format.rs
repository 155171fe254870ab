//! Embed and message formatting for command replies.

use chrono::{DateTime, Utc};
use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::{
    error::{internal::InternalError, AppError},
    model::{
        character::{CharacterHistoryEntry, CharacterLookup, LookupSource},
        trend::{CharacterProgress, LevelProjection, TrendStats},
    },
    service::trend::{TARGET_LEVEL, TREND_WINDOW_DAYS},
};

const COLOR_FRESH: u32 = 0x2ecc71;
const COLOR_CACHED: u32 = 0x3498db;
const COLOR_STALE: u32 = 0xe67e22;

pub const MISSING_NAME_MESSAGE: &str = "Please provide a character name.";

pub fn not_found_message(name: &str) -> String {
    format!(
        "No character named **{}** was found on any guild ranking.",
        name
    )
}

pub fn untracked_message(name: &str) -> String {
    format!(
        "**{}** is not tracked yet. Use `/character` to look it up first.",
        name
    )
}

/// Builds the reply embed for `/character`.
///
/// # Returns
/// - `Ok(CreateEmbed)` - Embed ready to send
/// - `Err(AppError::InternalErr)` - `last_seen` is not a valid Discord timestamp
pub fn character_embed(lookup: &CharacterLookup) -> Result<CreateEmbed, AppError> {
    let character = &lookup.character;

    Ok(CreateEmbed::new()
        .title(&character.name)
        .color(source_color(lookup.source))
        .field("Guild", &character.guild, true)
        .field("Level", character.last_level.to_string(), true)
        .field("Resets", character.last_resets.to_string(), true)
        .field(
            "Last seen",
            format!("<t:{}:R>", character.last_seen.timestamp()),
            false,
        )
        .footer(CreateEmbedFooter::new(source_label(lookup.source)))
        .timestamp(discord_timestamp(character.last_seen)?))
}

/// Builds the reply embed for `/progress`.
///
/// Without enough history the embed explains that statistics are not available yet
/// instead of showing empty fields.
pub fn progress_embed(progress: &CharacterProgress) -> Result<CreateEmbed, AppError> {
    let character = &progress.character;

    let mut embed = CreateEmbed::new()
        .title(format!("{} progress", character.name))
        .color(COLOR_CACHED)
        .field("Guild", &character.guild, true)
        .field("Level", character.last_level.to_string(), true)
        .field("Resets", character.last_resets.to_string(), true);

    embed = match &progress.stats {
        Some(stats) => add_stat_fields(embed, stats),
        None => embed.description(format!(
            "Not enough observations in the last {} days to compute a trend. \
             Look the character up again later to build its history.",
            TREND_WINDOW_DAYS
        )),
    };

    if !progress.recent.is_empty() {
        let lines: Vec<String> = progress.recent.iter().map(history_line).collect();
        embed = embed.field("Recent observations", lines.join("\n"), false);
    }

    Ok(embed
        .footer(CreateEmbedFooter::new(format!(
            "Last {} days",
            TREND_WINDOW_DAYS
        )))
        .timestamp(discord_timestamp(character.last_seen)?))
}

fn add_stat_fields(embed: CreateEmbed, stats: &TrendStats) -> CreateEmbed {
    let to_target = match stats.projection_to_target {
        Some(LevelProjection::AlreadyReached) => "Reached".to_string(),
        Some(LevelProjection::Hours(hours)) => format_hours(hours),
        None => "Unknown".to_string(),
    };

    embed
        .field(
            "Levels per hour",
            format!("{:.2}", stats.level_per_hour),
            true,
        )
        .field(
            "Next level in",
            optional_hours(stats.next_level_hours),
            true,
        )
        .field(format!("Level {} in", TARGET_LEVEL), to_target, true)
        .field(
            "Days per reset",
            stats
                .avg_days_per_reset
                .map(|days| format!("{:.1}", days))
                .unwrap_or_else(|| "Unknown".to_string()),
            true,
        )
        .field(
            "Next reset in",
            optional_hours(stats.projection_next_reset_days.map(|days| days * 24.0)),
            true,
        )
        .field("Samples", stats.sample_count.to_string(), true)
}

fn history_line(entry: &CharacterHistoryEntry) -> String {
    format!(
        "<t:{}:d> level {}, {} resets",
        entry.recorded_at.timestamp(),
        entry.level,
        entry.resets
    )
}

fn optional_hours(hours: Option<f64>) -> String {
    hours.map(format_hours).unwrap_or_else(|| "Unknown".to_string())
}

/// Renders a duration given in hours as `"2d 5h"`, `"3h 20m"` or `"45m"`.
///
/// Negative or non-finite inputs render as `"Unknown"`.
pub fn format_hours(hours: f64) -> String {
    if !hours.is_finite() || hours < 0.0 {
        return "Unknown".to_string();
    }

    let total_minutes = (hours * 60.0).round() as u64;
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes % (24 * 60)) / 60;
    let minutes = total_minutes % 60;

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else {
        "under a minute".to_string()
    }
}

pub fn source_label(source: LookupSource) -> &'static str {
    match source {
        LookupSource::Cached => "Cached result",
        LookupSource::Fresh => "Live from the guild rankings",
        LookupSource::Stale => "Last known data, not found on the rankings right now",
    }
}

fn source_color(source: LookupSource) -> u32 {
    match source {
        LookupSource::Cached => COLOR_CACHED,
        LookupSource::Fresh => COLOR_FRESH,
        LookupSource::Stale => COLOR_STALE,
    }
}

fn discord_timestamp(time: DateTime<Utc>) -> Result<Timestamp, AppError> {
    Timestamp::from_unix_timestamp(time.timestamp()).map_err(|e| {
        AppError::InternalErr(InternalError::InvalidDiscordTimestamp {
            timestamp: time.timestamp(),
            reason: e.to_string(),
        })
    })
}
