use std::net::SocketAddr;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_USER_AGENT: &str = concat!("resetboard/", env!("CARGO_PKG_VERSION"));

/// Settings read from the environment at startup.
///
/// `DATABASE_URL`, `DISCORD_BOT_TOKEN`, `RANKING_BASE_URL` and `RANKING_GUILDS` are required.
/// There is no built-in guild list: guild identifiers belong to the ranking site being
/// tracked, so every deployment names its own. The rest fall back to defaults.
pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Base URL of the guild ranking pages, without a trailing guild segment.
    pub ranking_base_url: String,
    /// Guild identifiers from the required `RANKING_GUILDS` list, in priority order. The first
    /// `PRIMARY_GUILD_COUNT` form the primary lookup subset.
    pub ranking_guilds: Vec<String>,
    pub ranking_user_agent: String,

    pub http_bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let ranking_guilds = ranking_guilds(std::env::var("RANKING_GUILDS").ok())?;

        let bind_addr = optional("HTTP_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let http_bind_addr =
            bind_addr
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidValue {
                    name: "HTTP_BIND_ADDR".to_string(),
                    reason: e.to_string(),
                })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            ranking_base_url: required("RANKING_BASE_URL")?,
            ranking_guilds,
            ranking_user_agent: optional("RANKING_USER_AGENT")
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            http_bind_addr,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Reads the guild list, which has no default.
fn ranking_guilds(raw: Option<String>) -> Result<Vec<String>, ConfigError> {
    let raw = raw.ok_or_else(|| ConfigError::MissingEnvVar("RANKING_GUILDS".to_string()))?;
    parse_guild_list(&raw)
}

/// Splits a comma-separated guild list, trimming blanks and dropping empty entries.
///
/// Order is preserved since it decides lookup priority.
fn parse_guild_list(raw: &str) -> Result<Vec<String>, ConfigError> {
    let guilds: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect();

    if guilds.is_empty() {
        return Err(ConfigError::InvalidValue {
            name: "RANKING_GUILDS".to_string(),
            reason: "at least one guild identifier is required".to_string(),
        });
    }

    Ok(guilds)
}
