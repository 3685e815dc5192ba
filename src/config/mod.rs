//! Configuration management for the diary crawler
//!
//! This module handles loading and validating configuration from environment
//! variables and TOML files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::crawler::url::DEFAULT_BASE_URL;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Crawler configuration
    pub crawler: CrawlerConfig,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Crawler-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Site origin diary pages are fetched from
    pub base_url: String,

    /// Pause between consecutive page requests in milliseconds (must be > 0)
    pub page_delay_ms: u64,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Whole-crawl deadline in seconds (0 = none)
    pub crawl_timeout_secs: u64,

    /// User agent string
    pub user_agent: String,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            page_delay_ms: 500,
            request_timeout_secs: 30,
            crawl_timeout_secs: 0,
            user_agent: format!("filmdiary/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse::<T>().ok())
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply environment variable overrides on top of this configuration
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(base_url) = std::env::var("FILMDIARY_BASE_URL") {
            self.crawler.base_url = base_url;
        }
        if let Some(delay) = env_parse("FILMDIARY_PAGE_DELAY_MS") {
            self.crawler.page_delay_ms = delay;
        }
        if let Some(timeout) = env_parse("FILMDIARY_REQUEST_TIMEOUT") {
            self.crawler.request_timeout_secs = timeout;
        }
        if let Some(timeout) = env_parse("FILMDIARY_CRAWL_TIMEOUT") {
            self.crawler.crawl_timeout_secs = timeout;
        }
        if let Ok(user_agent) = std::env::var("FILMDIARY_USER_AGENT") {
            self.crawler.user_agent = user_agent;
        }
        if let Ok(host) = std::env::var("FILMDIARY_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {port}"))?;
        }
        if let Ok(level) = std::env::var("FILMDIARY_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("FILMDIARY_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(self)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load from an optional file, then apply environment overrides and validate
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let config = base.with_env_overrides()?;
        config.validate().context("Invalid configuration")?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.crawler.base_url)
            .with_context(|| format!("base_url is not a valid URL: {}", self.crawler.base_url))?;
        if base.cannot_be_a_base() {
            anyhow::bail!("base_url cannot carry a path: {}", self.crawler.base_url);
        }

        if self.crawler.page_delay_ms == 0 {
            anyhow::bail!("page_delay_ms must be greater than 0");
        }

        if self.crawler.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }

        if self.server.port == 0 {
            anyhow::bail!("port must be greater than 0");
        }

        match self.logging.format.as_str() {
            "text" | "json" => {}
            other => anyhow::bail!("log format must be \"text\" or \"json\", got {other:?}"),
        }

        Ok(())
    }

    #[must_use]
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.crawler.page_delay_ms)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.crawler.request_timeout_secs)
    }

    /// Whole-crawl deadline, if one is configured
    #[must_use]
    pub fn crawl_timeout(&self) -> Option<Duration> {
        (self.crawler.crawl_timeout_secs > 0)
            .then(|| Duration::from_secs(self.crawler.crawl_timeout_secs))
    }
}
