//! Diary service: the entry point handed to collaborators
//!
//! Wraps a [`DiaryCrawler`] with the optional whole-crawl deadline and caller
//! cancellation, and maps crawl failures into the crate-wide [`Error`].
//! Nothing is cached; every call crawls afresh.

use std::future::Future;
use std::time::Duration;

use crate::config::Config;
use crate::crawler::{DiaryCrawler, DiaryFetcher, PageFetcher};
use crate::error::{DiaryErrorTrait, Error, Result};
use crate::models::DiaryEntry;
use crate::utils::error::CrawlerError;

pub struct DiaryService<F = DiaryFetcher> {
    crawler: DiaryCrawler<F>,
    crawl_timeout: Option<Duration>,
}

impl DiaryService<DiaryFetcher> {
    /// Build the HTTP-backed service from configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` for invalid settings and `Error::Fetch` if the
    /// HTTP client cannot be created
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let fetcher = DiaryFetcher::with_config(&config.crawler)?;
        let crawler = DiaryCrawler::new(fetcher).with_page_delay(config.page_delay());

        Ok(Self::new(crawler).with_crawl_timeout(config.crawl_timeout()))
    }
}

impl<F: PageFetcher> DiaryService<F> {
    #[must_use]
    pub fn new(crawler: DiaryCrawler<F>) -> Self {
        Self {
            crawler,
            crawl_timeout: None,
        }
    }

    /// Abort any crawl that runs longer than `limit`
    #[must_use]
    pub fn with_crawl_timeout(mut self, limit: Option<Duration>) -> Self {
        self.crawl_timeout = limit;
        self
    }

    /// Fetch the full diary of `username`, newest entry first
    ///
    /// An empty list means the user has no entries, or the diary is private
    /// or missing; these are not told apart.
    ///
    /// # Errors
    ///
    /// Returns `Error::Crawler` when any page fails or the deadline elapses;
    /// no partial result is returned
    pub async fn get_diary(&self, username: &str) -> Result<Vec<DiaryEntry>> {
        let crawl = self.crawler.crawl(username);

        let outcome = match self.crawl_timeout {
            Some(limit) => match tokio::time::timeout(limit, crawl).await {
                Ok(outcome) => outcome,
                Err(_) => Err(CrawlerError::TimedOut {
                    username: username.to_string(),
                }),
            },
            None => crawl.await,
        };

        match outcome {
            Ok(report) => {
                if report.entries.is_empty() {
                    tracing::info!(username, "No diary entries found");
                }
                Ok(report.entries)
            }
            Err(e) => {
                let err = Error::from(e);
                tracing::warn!(
                    username,
                    error = %err,
                    category = err.category().as_str(),
                    recoverable = err.is_recoverable(),
                    "Diary crawl failed"
                );
                Err(err)
            }
        }
    }

    /// Like [`get_diary`](Self::get_diary), but gives up as soon as `cancel`
    /// completes
    ///
    /// The in-flight request, if any, is dropped with the crawl.
    ///
    /// # Errors
    ///
    /// Returns `CrawlerError::Cancelled` (wrapped) on cancellation, otherwise
    /// whatever `get_diary` returns
    pub async fn get_diary_until<C>(&self, username: &str, cancel: C) -> Result<Vec<DiaryEntry>>
    where
        C: Future<Output = ()>,
    {
        tokio::select! {
            result = self.get_diary(username) => result,
            () = cancel => {
                tracing::info!(username, "Diary crawl cancelled");
                Err(CrawlerError::Cancelled {
                    username: username.to_string(),
                }
                .into())
            }
        }
    }
}
