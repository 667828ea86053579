//! Pagesift main entry point
//!
//! Command-line interface for crawling one section of a website and dumping
//! the extracted page records as JSON.

use anyhow::Context;
use clap::Parser;
use pagesift::chunking::split_record;
use pagesift::config::{load_config_with_hash, Config};
use pagesift::output::{collect_statistics, print_statistics, write_records};
use pagesift::Crawler;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pagesift: a site-section crawler and content extractor
///
/// Pagesift fetches a seed URL, discovers the same-site pages nested under
/// its path, and extracts a normalized record per page for downstream
/// search indexing.
#[derive(Parser, Debug)]
#[command(name = "pagesift")]
#[command(version)]
#[command(about = "Crawl a site section into structured page records", long_about = None)]
struct Cli {
    /// Seed URL to crawl (scheme optional; https assumed)
    #[arg(value_name = "SEED_URL")]
    seed: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Where to write the JSON record dump (overrides config)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Also write indexing-ready text chunks to this path
    #[arg(long, value_name = "PATH")]
    chunks: Option<PathBuf>,

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

    setup_logging(cli.verbose, cli.quiet);

    let config = load_configuration(&cli)?;

    let records_path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output.records_path));

    let crawler = Crawler::new(config.crawler.clone()).context("failed to build crawl engine")?;

    let outcome = crawler
        .crawl(&cli.seed)
        .await
        .with_context(|| format!("crawl of '{}' failed", cli.seed))?;

    write_records(&outcome, &records_path)
        .with_context(|| format!("failed to write records to {}", records_path.display()))?;

    if let Some(chunks_path) = &cli.chunks {
        let chunks: Vec<_> = outcome
            .records
            .iter()
            .flat_map(|record| split_record(record, &config.chunking))
            .collect();
        let json = serde_json::to_string_pretty(&chunks)?;
        std::fs::write(chunks_path, json)
            .with_context(|| format!("failed to write chunks to {}", chunks_path.display()))?;
        tracing::info!("Wrote {} chunks to {}", chunks.len(), chunks_path.display());
    }

    let stats = collect_statistics(&outcome);
    if !cli.quiet {
        print_statistics(&stats);
        println!("\nRecords written to: {}", records_path.display());
    }

    Ok(())
}

/// Loads the config file when one was given, falling back to defaults
fn load_configuration(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?;
            tracing::info!("Configuration loaded (hash: {})", hash);
            Ok(config)
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            Ok(Config::default())
        }
    }
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pagesift=info,warn"),
            1 => EnvFilter::new("pagesift=debug,info"),
            2 => EnvFilter::new("pagesift=trace,debug"),
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
