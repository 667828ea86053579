//! Statistics for a completed crawl run

use crate::crawler::CrawlOutcome;
use std::collections::BTreeMap;

/// Summary counts for one crawl run
#[derive(Debug, Clone)]
pub struct CrawlStatistics {
    /// Total records produced
    pub total_pages: usize,

    /// Records with extracted content
    pub succeeded: usize,

    /// Records carrying a fetch error
    pub failed: usize,

    /// Records per source host
    pub pages_by_source: BTreeMap<String, usize>,

    /// Total paragraphs extracted across all records
    pub total_paragraphs: usize,
}

/// Computes statistics from a crawl outcome
pub fn collect_statistics(outcome: &CrawlOutcome) -> CrawlStatistics {
    let mut pages_by_source = BTreeMap::new();
    let mut failed = 0;
    let mut total_paragraphs = 0;

    for record in &outcome.records {
        *pages_by_source.entry(record.source.clone()).or_insert(0) += 1;
        if record.is_error() {
            failed += 1;
        }
        total_paragraphs += record.paragraphs.len();
    }

    CrawlStatistics {
        total_pages: outcome.page_count,
        succeeded: outcome.page_count - failed,
        failed,
        pages_by_source,
        total_paragraphs,
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");
    println!("Total pages:      {}", stats.total_pages);
    println!("Succeeded:        {}", stats.succeeded);
    println!("Failed:           {}", stats.failed);
    println!("Paragraphs:       {}", stats.total_paragraphs);

    if !stats.pages_by_source.is_empty() {
        println!("\nPages by source:");
        for (source, count) in &stats.pages_by_source {
            println!("  {:<30} {}", source, count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PageRecord;
    use url::Url;

    #[test]
    fn test_collect_statistics() {
        let ok_url = Url::parse("https://example.edu/a").unwrap();
        let bad_url = Url::parse("https://example.edu/b").unwrap();

        let mut ok = PageRecord::fetch_failed(&ok_url, String::new());
        ok.error = None;
        ok.paragraphs = vec!["one".to_string(), "two".to_string()];
        let bad = PageRecord::fetch_failed(&bad_url, "HTTP 500".to_string());

        let outcome = CrawlOutcome {
            page_count: 2,
            records: vec![ok, bad],
        };

        let stats = collect_statistics(&outcome);
        assert_eq!(stats.total_pages, 2);
        assert_eq!(stats.succeeded, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.total_paragraphs, 2);
        assert_eq!(stats.pages_by_source.get("example.edu"), Some(&2));
    }
}
