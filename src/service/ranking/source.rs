use async_trait::async_trait;
use reqwest::{header::USER_AGENT, Url};
use std::time::Duration;

use crate::error::{config::ConfigError, scrape::ScrapeError};

/// Fetches the raw markup of one guild ranking page.
#[async_trait]
pub trait RankingSource: Send + Sync {
    /// Returns the page body, or an error for any transport failure or non-2xx status.
    async fn fetch_page(&self, guild: &str, page: u32) -> Result<String, ScrapeError>;
}

/// Ranking source backed by the public ranking website.
///
/// Pages live at `{base_url}/{guild}?page={page}`.
pub struct HttpRankingSource {
    client: reqwest::Client,
    base_url: Url,
    user_agent: String,
    timeout: Duration,
}

impl HttpRankingSource {
    /// Creates a ranking source for the given base URL.
    ///
    /// # Arguments
    /// - `client` - Shared HTTP client
    /// - `base_url` - Base URL the guild identifier is appended to
    /// - `user_agent` - Identifying user-agent sent with every request
    /// - `timeout` - Per-request timeout
    ///
    /// # Returns
    /// - `Ok(HttpRankingSource)` - Base URL is absolute and can take path segments
    /// - `Err(ConfigError::InvalidValue)` - Base URL is unusable
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        user_agent: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            name: "RANKING_BASE_URL".to_string(),
            reason,
        };

        let base_url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("URL cannot take path segments".to_string()));
        }

        Ok(Self {
            client,
            base_url,
            user_agent: user_agent.into(),
            timeout,
        })
    }

    /// Builds the URL of one ranking page.
    pub fn page_url(&self, guild: &str, page: u32) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(guild);
        }
        url.query_pairs_mut()
            .append_pair("page", &page.to_string());
        url
    }
}

#[async_trait]
impl RankingSource for HttpRankingSource {
    async fn fetch_page(&self, guild: &str, page: u32) -> Result<String, ScrapeError> {
        let url = self.page_url(guild, page);

        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, &self.user_agent)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Unavailable(format!(
                "{} returned HTTP {}",
                url, status
            )));
        }

        Ok(response.text().await?)
    }
}
