//! Output module for handing crawl results downstream
//!
//! This module handles:
//! - The page record shape consumed by the content pipeline
//! - Serializing records to JSON
//! - Recording and printing crawl statistics

mod json;
pub mod stats;
mod traits;

pub use json::JsonSink;
pub use stats::{print_statistics, write_statistics, CrawlOutcome, CrawlStatistics};
pub use traits::{OutputError, OutputResult, PageRecord, PageSink};
