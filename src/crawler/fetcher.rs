//! HTTP fetcher for diary listing pages
//!
//! One request per call, no retries: the crawl controller treats any failure
//! as terminal for the whole crawl.

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE},
    Client,
};
use std::time::Duration;

use crate::config::CrawlerConfig;
use crate::crawler::url::DiaryUrlBuilder;
use crate::utils::error::FetchError;

/// Source of raw diary listing pages
///
/// The crawler only depends on this trait, so tests and alternative transports
/// can stand in for the HTTP implementation.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch page `page` (1-based) of `username`'s diary as raw HTML
    async fn fetch_page(&self, username: &str, page: u32) -> Result<String, FetchError>;
}

/// HTTP implementation of [`PageFetcher`]
pub struct DiaryFetcher {
    /// HTTP client with configured timeout and compression
    client: Client,

    /// Site origin the listing path is appended to
    base_url: String,
}

impl DiaryFetcher {
    /// Create a fetcher against the public site with default settings
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(&CrawlerConfig::default())
    }

    /// Create a fetcher from crawler configuration
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn with_config(config: &CrawlerConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(&config.user_agent)
            .default_headers(Self::default_headers())
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Create a fetcher with a custom base URL for testing
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn with_base_url(base_url: &str) -> Result<Self, FetchError> {
        let mut fetcher = Self::new()?;
        fetcher.base_url = base_url.to_string();
        Ok(fetcher)
    }

    /// Site origin requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers
    }
}

#[async_trait]
impl PageFetcher for DiaryFetcher {
    async fn fetch_page(&self, username: &str, page: u32) -> Result<String, FetchError> {
        let url = DiaryUrlBuilder::page_url(&self.base_url, username, page)?;

        tracing::debug!(url = %url, username, page, "Fetching diary page");

        let response = self.client.get(&url).send().await.map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url = %url, status = status.as_u16(), "Diary page request failed");
            return Err(FetchError::Status(status.as_u16()));
        }

        response.text().await.map_err(classify)
    }
}

impl std::fmt::Debug for DiaryFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiaryFetcher")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Separate timeouts from other transport failures
fn classify(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Http(error)
    }
}
