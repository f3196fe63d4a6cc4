//! Shared state for one crawl run
//!
//! The visited set and the page counter live behind a single mutex so that
//! the dedup check, the budget check and the insertion happen in one critical
//! section. The lock is never held across an await point.

use crate::config::CrawlerConfig;
use crate::output::CrawlStatistics;
use crate::state::PageState;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};
use url::Url;

/// Limits bounding one crawl run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlBudget {
    /// Maximum number of link hops from the seed
    pub max_depth: u32,

    /// Maximum number of pages scheduled for fetching
    pub max_pages: u32,

    /// Maximum number of fetches in flight across the whole run
    pub concurrency_limit: u32,
}

impl CrawlBudget {
    pub fn from_config(config: &CrawlerConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            max_pages: config.max_pages.max(1),
            concurrency_limit: config.concurrency_limit.max(1),
        }
    }
}

impl Default for CrawlBudget {
    fn default() -> Self {
        Self::from_config(&CrawlerConfig::default())
    }
}

/// Outcome of the dedup/budget gate for one frontier entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The entry was recorded as visited; `page_number` is 1-based
    Admitted { page_number: u32 },

    /// The canonical URL was already scheduled by some branch
    AlreadyVisited,

    /// The entry is deeper than the budget allows
    DepthExceeded,

    /// The run already scheduled `max_pages` pages
    BudgetExhausted,
}

impl Admission {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Admitted { .. })
    }
}

#[derive(Debug, Default)]
struct Inner {
    visited: HashSet<String>,
    pages_scheduled: u32,
    extracted: u32,
    skipped: u32,
    failed: u32,
    dedup_hits: u32,
    budget_hits: u32,
}

/// Visited set, page counter and outcome counters shared by all branches
#[derive(Debug)]
pub struct CrawlState {
    budget: CrawlBudget,
    inner: Mutex<Inner>,
}

impl CrawlState {
    pub fn new(budget: CrawlBudget) -> Self {
        Self {
            budget,
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn budget(&self) -> CrawlBudget {
        self.budget
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Atomically tests and inserts a canonical URL into the visited set
    ///
    /// On admission the URL is inserted and the page counter incremented in
    /// the same critical section, so two branches can never schedule the same
    /// URL and the run never schedules more than `max_pages` pages.
    pub fn try_admit(&self, url: &Url, depth: u32) -> Admission {
        let mut inner = self.lock();

        if inner.visited.contains(url.as_str()) {
            inner.dedup_hits += 1;
            return Admission::AlreadyVisited;
        }

        if depth > self.budget.max_depth {
            inner.budget_hits += 1;
            return Admission::DepthExceeded;
        }

        if inner.pages_scheduled >= self.budget.max_pages {
            inner.budget_hits += 1;
            return Admission::BudgetExhausted;
        }

        inner.visited.insert(url.as_str().to_string());
        inner.pages_scheduled += 1;

        Admission::Admitted {
            page_number: inner.pages_scheduled,
        }
    }

    /// Returns true if the canonical URL was already scheduled
    pub fn is_visited(&self, url: &Url) -> bool {
        self.lock().visited.contains(url.as_str())
    }

    /// Returns true while more pages may be scheduled
    pub fn has_budget(&self) -> bool {
        self.lock().pages_scheduled < self.budget.max_pages
    }

    pub fn pages_scheduled(&self) -> u32 {
        self.lock().pages_scheduled
    }

    /// Records the terminal state of an admitted entry
    pub fn record_outcome(&self, state: PageState) {
        let mut inner = self.lock();
        match state {
            PageState::Extracted => inner.extracted += 1,
            PageState::Skipped => inner.skipped += 1,
            PageState::Failed => inner.failed += 1,
            PageState::Pending | PageState::Fetching => {}
        }
    }

    /// Snapshot of the run counters
    pub fn statistics(&self, records: usize) -> CrawlStatistics {
        let inner = self.lock();
        CrawlStatistics {
            scheduled: inner.pages_scheduled,
            extracted: inner.extracted,
            skipped: inner.skipped,
            failed: inner.failed,
            records,
            dedup_hits: inner.dedup_hits,
            budget_hits: inner.budget_hits,
        }
    }
}
