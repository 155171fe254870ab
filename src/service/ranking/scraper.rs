use chrono::Utc;
use std::{sync::Arc, time::Duration};

use crate::{
    error::scrape::ScrapeError,
    model::character::ScrapeResult,
    service::ranking::{parser::find_character_row, RankingSource, FETCH_TIMEOUT},
};

/// Looks a character up on a single guild ranking page.
///
/// Fetch and parse failures are logged and reported as "no match"; callers only ever see
/// the presence or absence of a result.
#[derive(Clone)]
pub struct GuildScraper {
    source: Arc<dyn RankingSource>,
    timeout: Duration,
}

impl GuildScraper {
    /// Creates a scraper with the standard fetch timeout.
    pub fn new(source: Arc<dyn RankingSource>) -> Self {
        Self::with_timeout(source, FETCH_TIMEOUT)
    }

    pub fn with_timeout(source: Arc<dyn RankingSource>, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    /// Searches one ranking page for `name`.
    ///
    /// # Arguments
    /// - `guild` - Guild identifier of the ranking page
    /// - `page` - Page number, starting at 1
    /// - `name` - Character name, matched ignoring letter case
    ///
    /// # Returns
    /// - `Some(ScrapeResult)` - The page lists the character
    /// - `None` - The page does not list the character, or could not be fetched or parsed
    pub async fn scrape(&self, guild: &str, page: u32, name: &str) -> Option<ScrapeResult> {
        match self.try_scrape(guild, page, name).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(
                    "Failed to scrape guild {} page {} for {}: {}",
                    guild,
                    page,
                    name,
                    e
                );
                None
            }
        }
    }

    async fn try_scrape(
        &self,
        guild: &str,
        page: u32,
        name: &str,
    ) -> Result<Option<ScrapeResult>, ScrapeError> {
        let body = tokio::time::timeout(self.timeout, self.source.fetch_page(guild, page))
            .await
            .map_err(|_| ScrapeError::Timeout {
                guild: guild.to_string(),
                page,
                timeout_ms: self.timeout.as_millis(),
            })??;

        let row = find_character_row(&body, name)?;

        Ok(row.map(|row| ScrapeResult {
            name: row.name,
            level: row.level,
            resets: row.resets,
            guild: guild.to_string(),
            observed_at: Utc::now(),
        }))
    }
}
