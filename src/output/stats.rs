//! Statistics for a finished crawl run

use crate::output::traits::PageRecord;
use std::io::{self, Write};

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Pages that passed the gate and were fetched
    pub scheduled: u32,

    /// Pages that produced a page record
    pub extracted: u32,

    /// Pages fetched without any usable content
    pub skipped: u32,

    /// Pages whose fetch failed
    pub failed: u32,

    /// Number of records in the final result
    pub records: usize,

    /// Entries rejected because their URL was already scheduled
    pub dedup_hits: u32,

    /// Entries rejected by the depth or page budget
    pub budget_hits: u32,
}

impl CrawlStatistics {
    /// Percentage of scheduled pages that produced a record
    pub fn success_rate(&self) -> f64 {
        if self.scheduled == 0 {
            return 0.0;
        }
        (self.extracted as f64 / self.scheduled as f64) * 100.0
    }
}

/// Result of one crawl run: the ordered records plus run counters
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    pub pages: Vec<PageRecord>,
    pub stats: CrawlStatistics,
}

/// Writes statistics in a formatted manner
pub fn write_statistics<W: Write>(out: &mut W, stats: &CrawlStatistics) -> io::Result<()> {
    writeln!(out, "=== Crawl Statistics ===\n")?;

    writeln!(out, "Pages:")?;
    writeln!(out, "  Scheduled: {}", stats.scheduled)?;
    writeln!(out, "  Extracted: {}", stats.extracted)?;
    writeln!(out, "  Skipped (no content): {}", stats.skipped)?;
    writeln!(out, "  Failed: {}", stats.failed)?;
    writeln!(out)?;

    writeln!(out, "Gate:")?;
    writeln!(out, "  Already visited: {}", stats.dedup_hits)?;
    writeln!(out, "  Over budget: {}", stats.budget_hits)?;
    writeln!(out)?;

    writeln!(
        out,
        "Success Rate: {:.1}% ({} / {} pages produced records)",
        stats.success_rate(),
        stats.extracted,
        stats.scheduled
    )
}

/// Prints statistics to stderr, keeping stdout free for crawl output
pub fn print_statistics(stats: &CrawlStatistics) {
    let _ = write_statistics(&mut io::stderr().lock(), stats);
}
