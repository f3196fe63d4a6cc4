//! Output handler traits and types
//!
//! This module defines the page record handed to the downstream content
//! pipeline and the trait a pipeline implements to receive it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Textual content extracted from one crawled page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Canonical URL of the page
    pub url: String,

    /// Document title, or the configured placeholder
    pub title: String,

    /// Paragraph texts in document order
    pub paragraphs: Vec<String>,

    /// Heading texts (h1-h6) in document order
    pub headings: Vec<String>,
}

/// Receives the crawl result for chunking and embedding
pub trait PageSink {
    /// Accepts the full, ordered list of page records of one run
    fn accept(&mut self, pages: &[PageRecord]) -> OutputResult<()>;
}

/// Collects records in memory
impl PageSink for Vec<PageRecord> {
    fn accept(&mut self, pages: &[PageRecord]) -> OutputResult<()> {
        self.extend_from_slice(pages);
        Ok(())
    }
}
