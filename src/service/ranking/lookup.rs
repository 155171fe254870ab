use futures::future::join_all;

use crate::{
    model::character::ScrapeResult,
    service::ranking::{GuildScraper, PAGES_PER_GUILD, PRIMARY_GUILD_COUNT},
};

/// Guild identifiers split into the preferred primary subset and the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSet {
    primary: Vec<String>,
    secondary: Vec<String>,
}

impl GuildSet {
    /// Splits `guilds` so the first `PRIMARY_GUILD_COUNT` entries form the primary subset.
    pub fn new(guilds: Vec<String>) -> Self {
        Self::with_primary_count(guilds, PRIMARY_GUILD_COUNT)
    }

    /// Splits `guilds` after the first `primary_count` entries.
    ///
    /// A count larger than the list puts every guild in the primary subset.
    pub fn with_primary_count(mut guilds: Vec<String>, primary_count: usize) -> Self {
        let secondary = guilds.split_off(primary_count.min(guilds.len()));

        Self {
            primary: guilds,
            secondary,
        }
    }

    pub fn primary(&self) -> &[String] {
        &self.primary
    }

    pub fn secondary(&self) -> &[String] {
        &self.secondary
    }

    pub fn len(&self) -> usize {
        self.primary.len() + self.secondary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Searches every configured guild ranking for a character at once.
///
/// All (guild, page) requests are issued concurrently and every one of them is awaited.
/// The winner is picked by request order rather than completion order: primary subset
/// before secondary, lower guild index first, page 1 before page 2.
#[derive(Clone)]
pub struct ParallelLookup {
    scraper: GuildScraper,
    guilds: GuildSet,
}

impl ParallelLookup {
    pub fn new(scraper: GuildScraper, guilds: GuildSet) -> Self {
        Self { scraper, guilds }
    }

    pub fn guilds(&self) -> &GuildSet {
        &self.guilds
    }

    /// Searches the configured guilds for `name`.
    ///
    /// # Returns
    /// - `Some(ScrapeResult)` - First match in request order
    /// - `None` - No page lists the character
    pub async fn search(&self, name: &str) -> Option<ScrapeResult> {
        self.search_guilds(name, &self.guilds).await
    }

    /// Searches an explicit guild set for `name`.
    ///
    /// Both subsets run concurrently. A primary match is preferred even when the secondary
    /// subset also matched.
    pub async fn search_guilds(&self, name: &str, guilds: &GuildSet) -> Option<ScrapeResult> {
        if guilds.is_empty() {
            return None;
        }

        tracing::debug!(
            "Searching {} guilds ({} pages each) for {}",
            guilds.len(),
            PAGES_PER_GUILD,
            name
        );

        let (primary, secondary) = tokio::join!(
            self.search_subset(name, guilds.primary()),
            self.search_subset(name, guilds.secondary()),
        );

        let result = primary.or(secondary);

        match &result {
            Some(found) => tracing::debug!("Found {} in guild {}", found.name, found.guild),
            None => tracing::debug!("{} not found in any guild", name),
        }

        result
    }

    /// Settles every (guild, page) request of one subset, then scans results in request order.
    async fn search_subset(&self, name: &str, guilds: &[String]) -> Option<ScrapeResult> {
        let requests = guilds.iter().flat_map(|guild| {
            (1..=PAGES_PER_GUILD).map(move |page| self.scraper.scrape(guild, page, name))
        });

        join_all(requests).await.into_iter().flatten().next()
    }
}
