//! Configuration module for campus-crawl
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key is optional, so a missing file section falls back to the built-in
//! crawl budget and session defaults.
//!
//! # Example
//!
//! ```no_run
//! use campus_crawl::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawl.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

pub use types::{
    Config, CrawlerConfig, ExtractionConfig, HttpConfig, RelevanceConfig, DEFAULT_KEYWORDS,
    DEFAULT_USER_AGENT,
};

pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
