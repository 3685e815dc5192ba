//! Unified error handling for the filmdiary crate
//!
//! Domain errors live in [`crate::utils::error`]; this module wraps them in a
//! single [`Error`] enum for use across module boundaries.
//!
//! - [`DiaryErrorTrait`] - Common interface implemented by the error types
//! - [`ErrorCategory`] - Classification of errors for handling strategies
//! - [`Error`] - Unified error enum

use std::io;
use thiserror::Error;

pub use crate::utils::error::{CrawlerError, FetchError};

/// Common trait for filmdiary error types
pub trait DiaryErrorTrait: std::error::Error {
    /// Check if this error is recoverable (a fresh request may succeed)
    fn is_recoverable(&self) -> bool;

    /// Get the error category for handling strategies
    fn category(&self) -> ErrorCategory;
}

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Network-related errors (transport, timeout, HTTP status)
    Network,
    /// Configuration and validation errors
    Config,
    /// Serialization and I/O errors
    Io,
    /// Crawl was stopped by its deadline or by the caller
    Cancelled,
    /// Other/unknown errors
    Other,
}

impl ErrorCategory {
    /// Short human-readable label
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network error",
            Self::Config => "configuration error",
            Self::Io => "I/O error",
            Self::Cancelled => "cancelled",
            Self::Other => "other error",
        }
    }
}

impl DiaryErrorTrait for FetchError {
    fn is_recoverable(&self) -> bool {
        self.is_transient()
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidUrl(_) => ErrorCategory::Config,
            _ => ErrorCategory::Network,
        }
    }
}

impl DiaryErrorTrait for CrawlerError {
    fn is_recoverable(&self) -> bool {
        match self {
            Self::ScrapeFailed { source, .. } => source.is_recoverable(),
            Self::TimedOut { .. } => true,
            Self::Cancelled { .. } => false,
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::ScrapeFailed { source, .. } => source.category(),
            Self::TimedOut { .. } | Self::Cancelled { .. } => ErrorCategory::Cancelled,
        }
    }
}

/// Unified error type for the filmdiary crate
#[derive(Error, Debug)]
pub enum Error {
    /// Crawl-level errors (scrape failed, timed out, cancelled)
    #[error(transparent)]
    Crawler(#[from] CrawlerError),

    /// Fetch errors raised outside a crawl
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic error with context
    #[error("{context}")]
    Other {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl DiaryErrorTrait for Error {
    fn is_recoverable(&self) -> bool {
        match self {
            Self::Crawler(e) => e.is_recoverable(),
            Self::Fetch(e) => e.is_recoverable(),
            Self::Io(_) => true,
            Self::Config(_) | Self::Other { .. } => false,
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Crawler(e) => e.category(),
            Self::Fetch(e) => e.category(),
            Self::Config(_) => ErrorCategory::Config,
            Self::Io(_) => ErrorCategory::Io,
            Self::Other { .. } => ErrorCategory::Other,
        }
    }
}

impl Error {
    /// Create a generic error with context and source
    pub fn with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Other {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration loading reports through anyhow
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Config(format!("{err:#}"))
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn scrape_failed(source: FetchError) -> Error {
        CrawlerError::ScrapeFailed {
            username: "someone".into(),
            page: 1,
            source,
        }
        .into()
    }

    #[test]
    fn test_error_category() {
        assert_eq!(scrape_failed(FetchError::Timeout).category(), ErrorCategory::Network);
        assert_eq!(
            Error::from(anyhow::anyhow!("bad port")).category(),
            ErrorCategory::Config
        );

        let timed_out: Error = CrawlerError::TimedOut {
            username: "someone".into(),
        }
        .into();
        assert_eq!(timed_out.category(), ErrorCategory::Cancelled);
    }

    #[test]
    fn test_is_recoverable_follows_fetch_kind() {
        assert!(scrape_failed(FetchError::Timeout).is_recoverable());
        assert!(scrape_failed(FetchError::Status(502)).is_recoverable());
        assert!(!scrape_failed(FetchError::Status(404)).is_recoverable());
    }

    #[test]
    fn test_crawler_error_is_transparent() {
        let err = scrape_failed(FetchError::Status(500));
        assert!(err.to_string().starts_with("Failed to scrape diary for someone"));
    }

    #[test]
    fn test_anyhow_context_is_kept() {
        let err = Error::from(anyhow::anyhow!("port must be greater than 0").context("Invalid configuration"));
        assert_eq!(
            err.to_string(),
            "Config error: Invalid configuration: port must be greater than 0"
        );
    }

    #[test]
    fn test_error_with_source() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err = Error::with_source("Failed to bind 127.0.0.1:5000", io);

        assert_eq!(err.category(), ErrorCategory::Other);
        assert_eq!(err.to_string(), "Failed to bind 127.0.0.1:5000");
        assert!(std::error::Error::source(&err).is_some());
    }
}
