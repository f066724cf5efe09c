//! Sitegrab main entry point
//!
//! Thin command-line wrapper around the library: load a configuration,
//! run one crawl, persist the artifact, print a summary.

use clap::Parser;
use sitegrab::config::{load_config, validate, CrawlConfig};
use sitegrab::crawler::crawl;
use sitegrab::output::persist;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sitegrab: a single-site content harvester
///
/// Crawls every reachable page of one site, extracts normalized text from
/// HTML pages and linked PDFs, and writes an aggregated JSON artifact.
#[derive(Parser, Debug)]
#[command(name = "sitegrab")]
#[command(version = "1.0.0")]
#[command(about = "Crawl one site and aggregate its text content", long_about = None)]
struct Cli {
    /// Start URL; its host becomes the crawl scope
    #[arg(value_name = "URL")]
    url: String,

    /// Path to a TOML configuration file (defaults apply without one)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured output file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Override the configured page budget
    #[arg(long, value_name = "N")]
    max_pages: Option<usize>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, or start from defaults
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("loading configuration from {}", path.display());
            load_config(path)?
        }
        None => CrawlConfig::default(),
    };

    if let Some(output) = cli.output {
        config.output_file = output;
    }
    if let Some(max_pages) = cli.max_pages {
        config.max_pages = max_pages;
    }

    // Overrides bypass load_config, so check the merged result
    validate(&config)?;

    let source = config.source.clone().unwrap_or_else(|| cli.url.clone());
    let output_file = config.output_file.clone();

    // Run the crawl
    let result = crawl(&cli.url, config).await?;

    // Persist the artifact
    persist(&result, &source, &output_file)?;

    println!(
        "Crawl complete: {} pages extracted ({} html, {} pdf), {} URLs visited, {} failed",
        result.stats.total_pages,
        result.stats.html_count,
        result.stats.pdf_count,
        result.stats.urls_visited,
        result.failed_count()
    );
    println!("Output written to {}", output_file.display());

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitegrab=info,warn"),
            1 => EnvFilter::new("sitegrab=debug,info"),
            2 => EnvFilter::new("sitegrab=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
