//! Diary crawl controller
//!
//! Walks a user's diary page by page, newest first. The loop is split in two:
//! [`CrawlState`] is a pure fold over parsed pages that decides what happens
//! next, and [`DiaryCrawler`] performs the I/O and the pacing pause that the
//! state asks for.

use std::time::Duration;

use crate::crawler::fetcher::{DiaryFetcher, PageFetcher};
use crate::models::DiaryEntry;
use crate::parser::{parse_page, DiaryPage};
use crate::utils::error::CrawlerError;

/// Pause between consecutive page requests
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(500);

/// Next action of a crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlStep {
    /// Fetch this 1-based page
    Fetching(u32),
    Done,
}

/// Accumulated state of one crawl
///
/// Each crawl owns its state; nothing is shared between crawls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlState {
    entries: Vec<DiaryEntry>,
    pages: u32,
    pauses: u32,
    next: CrawlStep,
}

impl CrawlState {
    /// Fresh state positioned at page 1
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            pages: 0,
            pauses: 0,
            next: CrawlStep::Fetching(1),
        }
    }

    #[must_use]
    pub fn next_step(&self) -> CrawlStep {
        self.next
    }

    /// Whether a pacing pause is owed before the next fetch
    ///
    /// True on every transition into a page after the first.
    #[must_use]
    pub fn pause_due(&self) -> bool {
        matches!(self.next, CrawlStep::Fetching(page) if page > 1)
    }

    /// Record that the pacing pause was taken
    #[must_use]
    pub fn paused(mut self) -> Self {
        self.pauses += 1;
        self
    }

    /// Fold one parsed page into the state
    ///
    /// Entries are appended in page order. The crawl continues only when the
    /// page links to an older page *and* contained at least one entry; either
    /// condition alone ends it. Folding into a finished state is a no-op.
    #[must_use]
    pub fn accumulate(mut self, page: DiaryPage) -> Self {
        let CrawlStep::Fetching(current) = self.next else {
            return self;
        };

        let found = page.entries.len();
        self.pages += 1;
        self.entries.extend(page.entries);

        self.next = if page.has_next && found > 0 {
            CrawlStep::Fetching(current + 1)
        } else {
            CrawlStep::Done
        };

        tracing::debug!(
            page = current,
            found,
            total = self.entries.len(),
            has_next = page.has_next,
            next = ?self.next,
            "Processed diary page"
        );

        self
    }

    #[must_use]
    pub fn finish(self) -> CrawlReport {
        CrawlReport {
            entries: self.entries,
            pages: self.pages,
            pauses: self.pauses,
        }
    }
}

impl Default for CrawlState {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a completed crawl
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlReport {
    /// All entries, page 1 first, each page in source order
    pub entries: Vec<DiaryEntry>,
    /// Pages fetched
    pub pages: u32,
    /// Pacing pauses taken
    pub pauses: u32,
}

/// Sequential, paced crawler over a user's diary pages
pub struct DiaryCrawler<F = DiaryFetcher> {
    fetcher: F,
    page_delay: Duration,
}

impl<F: PageFetcher> DiaryCrawler<F> {
    /// Create a crawler with the default pause
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            page_delay: DEFAULT_PAGE_DELAY,
        }
    }

    #[must_use]
    pub fn with_page_delay(mut self, page_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self
    }

    #[must_use]
    pub fn page_delay(&self) -> Duration {
        self.page_delay
    }

    #[must_use]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Crawl every diary page of `username`
    ///
    /// Pages are fetched strictly one after another. Any fetch failure aborts
    /// the crawl and discards what was gathered; nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns `CrawlerError::ScrapeFailed` carrying the failing page and the
    /// underlying `FetchError`
    pub async fn crawl(&self, username: &str) -> Result<CrawlReport, CrawlerError> {
        let mut state = CrawlState::new();

        while let CrawlStep::Fetching(page) = state.next_step() {
            if state.pause_due() {
                tokio::time::sleep(self.page_delay).await;
                state = state.paused();
            }

            let html = self
                .fetcher
                .fetch_page(username, page)
                .await
                .map_err(|source| CrawlerError::ScrapeFailed {
                    username: username.to_string(),
                    page,
                    source,
                })?;

            state = state.accumulate(parse_page(&html));
        }

        let report = state.finish();

        tracing::info!(
            username,
            entries = report.entries.len(),
            pages = report.pages,
            "Completed diary crawl"
        );

        Ok(report)
    }
}
