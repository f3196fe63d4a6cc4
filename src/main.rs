//! campus-crawl main entry point
//!
//! This is the command-line interface for the relevance-guided site crawler.

use anyhow::Context;
use campus_crawl::config::{load_config_with_hash, Config};
use campus_crawl::crawler::crawl_with_stats;
use campus_crawl::output::{print_statistics, JsonSink, PageSink};
use campus_crawl::state::CrawlBudget;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// campus-crawl: a bounded, relevance-guided site crawler
///
/// Crawls internal pages of a site starting from a seed URL, following only
/// links that look relevant, and writes the extracted page records as JSON.
#[derive(Parser, Debug)]
#[command(name = "campus-crawl")]
#[command(version)]
#[command(about = "A bounded, relevance-guided site crawler", long_about = None)]
struct Cli {
    /// Seed URL to start crawling from (http:// or https://)
    #[arg(value_name = "SEED_URL")]
    seed: String,

    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Write page records to this file instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show the crawl budget without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if cli.dry_run {
        handle_dry_run(&cli.seed, &config);
        return Ok(());
    }

    handle_crawl(&cli, &config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("campus_crawl=info,warn"),
            1 => EnvFilter::new("campus_crawl=debug,info"),
            2 => EnvFilter::new("campus_crawl=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows what a crawl would use
fn handle_dry_run(seed: &str, config: &Config) {
    let budget = CrawlBudget::from_config(&config.crawler);

    println!("=== campus-crawl Dry Run ===\n");

    println!("Seed: {}", seed);
    match campus_crawl::canonicalize_url(seed) {
        Ok(url) => println!("  Canonical: {}", url),
        Err(e) => println!("  Invalid: {}", e),
    }

    println!("\nBudget:");
    println!("  Max depth: {}", budget.max_depth);
    println!("  Max pages: {}", budget.max_pages);
    println!("  Concurrency limit: {}", budget.concurrency_limit);
    println!("  Links per page: {}", config.crawler.links_per_page_cap);

    println!("\nExtraction:");
    println!(
        "  Paragraph min length: {}",
        config.extraction.paragraph_min_length
    );
    println!(
        "  Max paragraphs / headings: {} / {}",
        config.extraction.max_paragraphs, config.extraction.max_headings
    );

    println!("\nRelevance:");
    println!(
        "  Similarity threshold: {:.2}",
        config.relevance.similarity_threshold
    );
    println!("  Keywords: {}", config.relevance.keywords.join(", "));

    println!("\nHTTP:");
    println!("  User agent: {}", config.http.user_agent);
    println!(
        "  Timeouts (request / total / connect): {}s / {}s / {}s",
        config.http.request_timeout_secs,
        config.http.total_timeout_secs,
        config.http.connect_timeout_secs
    );
    println!(
        "  Connections (total / per host): {} / {}",
        config.http.max_connections, config.http.max_connections_per_host
    );
}

/// Handles the main crawl operation
async fn handle_crawl(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let outcome = crawl_with_stats(&cli.seed, config)
        .await
        .with_context(|| format!("Crawl of {} failed", cli.seed))?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            JsonSink::new(BufWriter::new(file)).accept(&outcome.pages)?;
            tracing::info!("Wrote {} pages to {}", outcome.pages.len(), path.display());
        }
        None => {
            JsonSink::new(io::stdout().lock()).accept(&outcome.pages)?;
        }
    }

    if !cli.quiet {
        print_statistics(&outcome.stats);
    }

    Ok(())
}
