//! filmdiary - Letterboxd film diary scraper
//!
//! Crawls a user's public diary listing page by page and normalizes every row
//! into a [`DiaryEntry`] for downstream aggregation and charting.
//!
//! # Architecture
//!
//! - [`config`] - Configuration management and settings
//! - [`crawler`] - Page fetching and paced, sequential crawl control
//! - [`parser`] - Diary row extraction and rating normalization
//! - [`models`] - Core data structures and types
//! - [`service`] - The `get_diary` entry point
//! - [`server`] - JSON HTTP endpoint
//! - [`utils`] - Common utilities and domain error types
//!
//! # Example
//!
//! ```no_run
//! use filmdiary::config::Config;
//! use filmdiary::service::DiaryService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let service = DiaryService::from_config(&Config::from_env()?)?;
//!     let entries = service.get_diary("dave").await?;
//!     println!("{} entries", entries.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod crawler;
pub mod error;
pub mod models;
pub mod parser;
pub mod server;
pub mod service;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::crawler::{DiaryCrawler, DiaryFetcher, PageFetcher};
    pub use crate::error::{DiaryErrorTrait, Error, ErrorCategory, Result};
    pub use crate::models::{DiaryEntry, DiarySummary, Rating};
    pub use crate::service::DiaryService;
}

// Direct re-exports for convenience
pub use models::{DiaryEntry, DiarySummary, Rating};
