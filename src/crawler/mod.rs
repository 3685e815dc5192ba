//! Diary crawling
//!
//! - [`fetcher`] - one HTTP request per listing page
//! - [`url`] - listing page URL template
//! - [`diary`] - page-by-page crawl control with pacing

pub mod diary;
pub mod fetcher;
pub mod url;

pub use diary::{CrawlReport, CrawlState, CrawlStep, DiaryCrawler, DEFAULT_PAGE_DELAY};
pub use fetcher::{DiaryFetcher, PageFetcher};
pub use url::{DiaryUrlBuilder, DEFAULT_BASE_URL};
