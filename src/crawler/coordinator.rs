//! Crawler coordinator - main crawl orchestration logic
//!
//! Visits the seed page, extracts its content, picks the relevant internal
//! links and recurses on them up to the depth and page budgets. Branches run
//! concurrently; a run-wide semaphore bounds how many fetches are in flight,
//! and the shared `CrawlState` makes sure every canonical URL is scheduled at
//! most once.
//!
//! Child results are joined in link-discovery order, so the final ordering
//! does not depend on which fetch finishes first.

use crate::config::{validate, Config};
use crate::crawler::fetcher::Fetch;
use crate::crawler::parser::{Anchor, PageExtractor};
use crate::output::{CrawlOutcome, PageRecord};
use crate::relevance::RelevanceFilter;
use crate::state::{Admission, CrawlBudget, CrawlState, PageState};
use crate::url::{canonicalize_url, is_internal_link, resolve_link};
use crate::CrawlError;
use futures::future::{join_all, BoxFuture, FutureExt};
use std::time::Instant;
use tokio::sync::Semaphore;
use url::Url;

/// A unit of crawl work: a canonical URL and its hop count from the seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    pub url: Url,
    pub depth: u32,
}

/// Result of visiting one frontier entry and everything below it
#[derive(Debug, Default)]
struct Visit {
    state: Option<PageState>,
    records: Vec<PageRecord>,
}

impl Visit {
    fn ended(state: PageState) -> Self {
        Self {
            state: Some(state),
            records: Vec::new(),
        }
    }
}

/// Main crawler coordinator structure
///
/// One coordinator serves exactly one run; its visited set, counters and
/// admission gate are dropped with it.
pub struct Coordinator<F: Fetch> {
    fetcher: F,
    extractor: PageExtractor,
    filter: RelevanceFilter,
    state: CrawlState,
    gate: Semaphore,
    seed: Url,
    max_depth: u32,
    links_per_page_cap: usize,
}

impl<F: Fetch> Coordinator<F> {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    /// * `fetcher` - The fetch client used for every page
    /// * `seed` - Start page and domain anchor for internal-link checks
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(CrawlError::Config)` - The configuration failed validation
    /// * `Err(CrawlError::InvalidSeed)` - The seed is not an `http(s)://` URL
    pub fn new(config: &Config, fetcher: F, seed: &str) -> Result<Self, CrawlError> {
        validate(config)?;

        let seed = canonicalize_url(seed).map_err(|source| CrawlError::InvalidSeed {
            url: seed.to_string(),
            source,
        })?;

        let budget = CrawlBudget::from_config(&config.crawler);

        Ok(Self {
            fetcher,
            extractor: PageExtractor::new(config.extraction.clone()),
            filter: RelevanceFilter::from_config(&config.relevance),
            gate: Semaphore::new(budget.concurrency_limit as usize),
            state: CrawlState::new(budget),
            seed,
            max_depth: budget.max_depth,
            links_per_page_cap: config.crawler.links_per_page_cap.max(1) as usize,
        })
    }

    pub fn seed(&self) -> &Url {
        &self.seed
    }

    pub fn budget(&self) -> CrawlBudget {
        self.state.budget()
    }

    /// Runs the crawl from the seed until the frontier or the budget is exhausted
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlOutcome)` - Records in deterministic order plus run counters;
    ///   the record list is empty if the seed had no usable content
    /// * `Err(CrawlError::SeedUnreachable)` - The seed page could not be fetched
    pub async fn run(self) -> Result<CrawlOutcome, CrawlError> {
        let budget = self.budget();
        tracing::info!(
            seed = %self.seed,
            max_depth = budget.max_depth,
            max_pages = budget.max_pages,
            concurrency = budget.concurrency_limit,
            "Starting crawl"
        );

        let start_time = Instant::now();
        let root = FrontierEntry {
            url: self.seed.clone(),
            depth: 0,
        };
        let visit = self.visit(root).await;

        if visit.state == Some(PageState::Failed) {
            tracing::error!("Seed {} could not be fetched", self.seed);
            return Err(CrawlError::SeedUnreachable {
                url: self.seed.to_string(),
            });
        }

        let stats = self.state.statistics(visit.records.len());
        tracing::info!(
            "Crawl exhausted. Found {} pages ({} fetched) in {:?}",
            visit.records.len(),
            stats.scheduled,
            start_time.elapsed()
        );
        for (i, page) in visit.records.iter().take(3).enumerate() {
            tracing::info!(
                "Page {}: {} - {} paragraphs",
                i + 1,
                page.title,
                page.paragraphs.len()
            );
        }

        Ok(CrawlOutcome {
            pages: visit.records,
            stats,
        })
    }

    /// Visits one entry and, recursively, the relevant links it discovers
    ///
    /// Returns this page's record followed by the children's records in the
    /// order their links appeared on the page.
    fn visit(&self, entry: FrontierEntry) -> BoxFuture<'_, Visit> {
        async move {
            let FrontierEntry { url, depth } = entry;

            let page_number = match self.state.try_admit(&url, depth) {
                Admission::Admitted { page_number } => page_number,
                rejected => {
                    tracing::debug!(url = %url, depth, "Not scheduling: {:?}", rejected);
                    return Visit::default();
                }
            };

            tracing::info!("Scraping (depth {}, page {}): {}", depth, page_number, url);
            self.transition(&url, PageState::Pending, PageState::Fetching);

            let body = match self.gate.acquire().await {
                Ok(_permit) => self.fetcher.fetch(&url).await,
                Err(_) => None,
            };

            let Some(body) = body else {
                self.transition(&url, PageState::Fetching, PageState::Failed);
                return Visit::ended(PageState::Failed);
            };

            let page = self.extractor.extract(&body);
            let Some(record) = page.to_record(url.as_str()) else {
                tracing::info!("Skipping {} - no content found", url);
                self.transition(&url, PageState::Fetching, PageState::Skipped);
                return Visit::ended(PageState::Skipped);
            };
            self.transition(&url, PageState::Fetching, PageState::Extracted);

            let links = if depth < self.max_depth && self.state.has_budget() {
                self.select_links(&url, &page.anchors)
            } else {
                Vec::new()
            };
            drop(page);

            let children = join_all(links.into_iter().map(|link| {
                self.visit(FrontierEntry {
                    url: link,
                    depth: depth + 1,
                })
            }))
            .await;

            let mut records = vec![record];
            for child in children {
                records.extend(child.records);
            }

            Visit {
                state: Some(PageState::Extracted),
                records,
            }
        }
        .boxed()
    }

    /// Picks the links worth following from a page's anchors
    ///
    /// Keeps canonical targets that are not yet visited, live on the seed's
    /// host and pass the relevance filter; the cap applies to the survivors.
    fn select_links(&self, page_url: &Url, anchors: &[Anchor]) -> Vec<Url> {
        let mut kept: Vec<Url> = Vec::new();

        for anchor in anchors {
            if kept.len() >= self.links_per_page_cap {
                break;
            }

            let Some(link) = resolve_link(&anchor.href, page_url) else {
                continue;
            };

            if kept.contains(&link) || self.state.is_visited(&link) {
                continue;
            }

            if !is_internal_link(&self.seed, &link) {
                tracing::trace!("Skipping external link {}", link);
                continue;
            }

            if !self.filter.is_relevant(&anchor.href, &anchor.text) {
                tracing::debug!("Skipping irrelevant link {}", link);
                continue;
            }

            kept.push(link);
        }

        kept
    }

    fn transition(&self, url: &Url, from: PageState, to: PageState) {
        debug_assert!(
            from.can_transition_to(to),
            "invalid transition {} -> {}",
            from,
            to
        );
        tracing::trace!(url = %url, "{} -> {}", from, to);
        if to.is_terminal() {
            self.state.record_outcome(to);
        }
    }
}
