//! Guild ranking page scraping.
//!
//! A `RankingSource` fetches the raw markup of one ranking page. `GuildScraper` turns one
//! (guild, page) pair into an optional `ScrapeResult`, swallowing every failure, and
//! `ParallelLookup` fans a name search out across all configured guilds.

pub mod lookup;
pub mod parser;
pub mod scraper;
pub mod source;

#[cfg(test)]
pub mod stub;

pub use self::lookup::{GuildSet, ParallelLookup};
pub use self::scraper::GuildScraper;
pub use self::source::{HttpRankingSource, RankingSource};

use std::time::Duration;

/// Upper bound for a single ranking page fetch.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Ranking pages scanned per guild, starting at page 1.
pub const PAGES_PER_GUILD: u32 = 2;

/// Number of leading guilds that form the preferred lookup subset.
pub const PRIMARY_GUILD_COUNT: usize = 3;
