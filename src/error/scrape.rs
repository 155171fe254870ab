use thiserror::Error;

/// Failures while fetching or parsing a ranking page.
///
/// These never leave the scraper: `GuildScraper` logs them and reports "no match".
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Transport failure such as a refused connection or an undecodable body.
    #[error("Ranking request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The fetch did not complete within the scraper's timeout.
    #[error("Ranking request for guild '{guild}' page {page} timed out after {timeout_ms} ms")]
    Timeout {
        guild: String,
        page: u32,
        timeout_ms: u128,
    },

    /// The ranking site answered with a non-success status.
    #[error("Ranking source unavailable: {0}")]
    Unavailable(String),

    /// A CSS selector used to scan the page could not be built.
    #[error("Invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },
}
