//! In-memory ranking source for tests.

use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use crate::{error::scrape::ScrapeError, service::ranking::RankingSource};

enum StubPage {
    Html(String),
    Delayed(Duration, String),
    Failure,
    Hang,
}

/// Ranking source serving canned pages keyed by (guild, page).
///
/// Pages that were not configured return an empty ranking table.
pub struct StubRankingSource {
    pages: HashMap<(String, u32), StubPage>,
    fetches: AtomicUsize,
}

impl StubRankingSource {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn with_page(mut self, guild: &str, page: u32, html: String) -> Self {
        self.pages
            .insert((guild.to_string(), page), StubPage::Html(html));
        self
    }

    /// Serves `html` after `delay` has elapsed.
    pub fn with_delayed_page(mut self, guild: &str, page: u32, delay: Duration, html: String) -> Self {
        self.pages
            .insert((guild.to_string(), page), StubPage::Delayed(delay, html));
        self
    }

    /// Fails the request as a transport error would.
    pub fn with_failure(mut self, guild: &str, page: u32) -> Self {
        self.pages
            .insert((guild.to_string(), page), StubPage::Failure);
        self
    }

    /// Never answers the request.
    pub fn with_hang(mut self, guild: &str, page: u32) -> Self {
        self.pages.insert((guild.to_string(), page), StubPage::Hang);
        self
    }

    /// Number of fetches issued so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl Default for StubRankingSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RankingSource for StubRankingSource {
    async fn fetch_page(&self, guild: &str, page: u32) -> Result<String, ScrapeError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        match self.pages.get(&(guild.to_string(), page)) {
            Some(StubPage::Html(html)) => Ok(html.clone()),
            Some(StubPage::Delayed(delay, html)) => {
                tokio::time::sleep(*delay).await;
                Ok(html.clone())
            }
            Some(StubPage::Failure) => Err(ScrapeError::Unavailable(format!(
                "stub failure for {} page {}",
                guild, page
            ))),
            Some(StubPage::Hang) => std::future::pending().await,
            None => Ok(ranking_html(&[])),
        }
    }
}

/// Renders a ranking table with one row per `(name, level, resets)`.
pub fn ranking_html(rows: &[(&str, u32, u32)]) -> String {
    let body: String = rows
        .iter()
        .enumerate()
        .map(|(i, (name, level, resets))| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                i + 1,
                name,
                level,
                resets
            )
        })
        .collect();

    format!(
        "<html><body><table><tr><th>#</th><th>Name</th><th>Level</th><th>Resets</th></tr>{}</table></body></html>",
        body
    )
}
