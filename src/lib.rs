//! campus-crawl: a bounded, relevance-guided site crawler
//!
//! This crate crawls one site from a seed URL, follows only internal links
//! whose href or text looks relevant, and hands the extracted page content
//! (title, paragraphs, headings) to a downstream content pipeline.

pub mod config;
pub mod crawler;
pub mod output;
pub mod relevance;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for crawl runs
///
/// Failures of individual pages never show up here; they are logged and the
/// run continues. Only problems that leave the whole run without a result
/// are surfaced.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid seed URL '{url}': {source}")]
    InvalidSeed { url: String, source: UrlError },

    #[error("Seed URL {url} could not be fetched; no pages recovered")]
    SeedUnreachable { url: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Result type alias for crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl_site, Coordinator, Fetch, HttpFetcher};
pub use output::{CrawlOutcome, CrawlStatistics, PageRecord};
pub use relevance::{is_relevant, RelevanceFilter};
pub use state::{CrawlBudget, PageState};
pub use crate::url::canonicalize_url;
