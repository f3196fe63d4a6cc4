//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `PageState`: Tracks the state of individual frontier entries (pending, fetching, extracted, etc.)
//! - `CrawlState`: The visited set and page counter shared by every branch of a run
//! - `CrawlBudget`: The immutable depth/page/concurrency limits of a run

mod crawl_state;
mod page_state;

pub use crawl_state::{Admission, CrawlBudget, CrawlState};
pub use page_state::PageState;
