//! Error types for the diary crawler
//!
//! This module defines the domain error types raised while fetching and
//! crawling diary pages.

use thiserror::Error;

/// Errors that can occur while fetching a single diary page
///
/// Every variant is a "fetch failed" condition for crawl control purposes; the
/// variants only exist so callers can tell transport trouble from a response
/// the site refused to serve.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Non-success response status
    #[error("Unexpected response status: {0}")]
    Status(u16),

    /// Invalid URL or page number
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Status code of the failed response, if the server answered at all
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether a later attempt could plausibly succeed
    ///
    /// The crawler itself never retries; this is for callers deciding what to
    /// tell the user.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(_) | Self::Timeout => true,
            Self::Status(code) => matches!(code, 429 | 500 | 502 | 503 | 504),
            Self::InvalidUrl(_) => false,
        }
    }
}

/// Errors that end a diary crawl
#[derive(Error, Debug)]
pub enum CrawlerError {
    /// A page fetch failed mid-crawl; everything gathered so far is discarded
    #[error("Failed to scrape diary for {username} (page {page}): {source}")]
    ScrapeFailed {
        username: String,
        page: u32,
        #[source]
        source: FetchError,
    },

    /// The crawl deadline elapsed before the last page was reached
    #[error("Timed out scraping diary for {username}")]
    TimedOut { username: String },

    /// The caller cancelled the crawl
    #[error("Cancelled scraping diary for {username}")]
    Cancelled { username: String },
}

impl CrawlerError {
    /// Username the failed crawl was for
    #[must_use]
    pub fn username(&self) -> &str {
        match self {
            Self::ScrapeFailed { username, .. }
            | Self::TimedOut { username }
            | Self::Cancelled { username } => username,
        }
    }
}
