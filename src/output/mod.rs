//! Output module for crawl results
//!
//! This module handles:
//! - Serializing page records to JSON for downstream consumers
//! - Summarizing a crawl run's statistics

pub mod stats;

pub use stats::{collect_statistics, print_statistics, CrawlStatistics};

use crate::crawler::CrawlOutcome;
use crate::Result;
use std::io::Write;
use std::path::Path;

/// Writes a crawl outcome's records as pretty-printed JSON
pub fn write_records(outcome: &CrawlOutcome, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &outcome.records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Serializes a crawl outcome's records to a JSON string
pub fn records_to_json(outcome: &CrawlOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(&outcome.records)?)
}
