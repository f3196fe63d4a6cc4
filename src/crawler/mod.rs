//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with connection caps and timeouts
//! - HTML parsing, content extraction and anchor discovery
//! - Overall crawl coordination under depth, page and concurrency budgets

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{Coordinator, FrontierEntry};
pub use fetcher::{build_http_client, Fetch, HttpFetcher};
pub use parser::{Anchor, PageExtractor, ParsedPage};

use crate::config::Config;
use crate::output::{CrawlOutcome, PageRecord};
use crate::CrawlError;

/// Crawls a site from its seed URL and returns the ordered page records
///
/// This is the main entry point for a crawl. It will:
/// 1. Validate and canonicalize the seed
/// 2. Build the HTTP session
/// 3. Visit the seed and the relevant internal links it leads to
/// 4. Return every page record in link-discovery order
///
/// # Returns
///
/// * `Ok(Vec<PageRecord>)` - Possibly empty if the seed had no content
/// * `Err(CrawlError)` - The seed was malformed or could not be fetched
///
/// # Example
///
/// ```no_run
/// use campus_crawl::config::Config;
/// use campus_crawl::crawler::crawl_site;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pages = crawl_site("https://college.edu/", &Config::default()).await?;
/// println!("Crawled {} pages", pages.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl_site(seed: &str, config: &Config) -> Result<Vec<PageRecord>, CrawlError> {
    Ok(crawl_with_stats(seed, config).await?.pages)
}

/// Like [`crawl_site`], but also returns the run statistics
pub async fn crawl_with_stats(seed: &str, config: &Config) -> Result<CrawlOutcome, CrawlError> {
    let fetcher = HttpFetcher::new(&config.http)?;
    crawl_with(seed, config, fetcher).await
}

/// Runs a crawl with a caller-provided fetch client
pub async fn crawl_with<F: Fetch>(
    seed: &str,
    config: &Config,
    fetcher: F,
) -> Result<CrawlOutcome, CrawlError> {
    Coordinator::new(config, fetcher, seed)?.run().await
}
