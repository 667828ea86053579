//! Crawl coordination: the two-phase engine behind a run
//!
//! Phase 1 fetches the seed page and discovers its in-scope links; a seed
//! failure is fatal to the run. Phase 2 fans out over the discovered set
//! with bounded concurrency, extracting a record per page and folding
//! per-page failures into error-bearing records. The output sequence is
//! sorted by URL after all fetches complete, so record order never depends
//! on network timing.

use crate::config::CrawlerConfig;
use crate::crawler::discovery::discover_links;
use crate::crawler::extractor::extract_page;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::record::PageRecord;
use crate::url::normalize_url;
use crate::{CrawlError, SiftError};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use url::Url;

/// The full result of one crawl run
#[derive(Debug)]
pub struct CrawlOutcome {
    /// One record per discovered URL, ordered lexicographically by URL
    pub records: Vec<PageRecord>,

    /// Number of records produced
    pub page_count: usize,
}

/// The crawl engine for one or more runs
///
/// Owns the shared HTTP client; runs against different seeds may execute
/// concurrently on the same engine since each run keeps its own discovered
/// set and result collection.
pub struct Crawler {
    client: Client,
    config: CrawlerConfig,
}

impl Crawler {
    /// Creates an engine with a freshly built HTTP client
    pub fn new(config: CrawlerConfig) -> Result<Self, CrawlError> {
        let client = build_http_client(&config)?;
        Ok(Self { client, config })
    }

    /// Creates an engine around an existing client
    ///
    /// Lets tests and embedders inject a client with their own middleware
    /// or pool settings.
    pub fn with_client(client: Client, config: CrawlerConfig) -> Self {
        Self { client, config }
    }

    /// Crawls the section rooted at `seed` and returns its page records
    ///
    /// Fails only when the seed itself cannot be normalized or fetched.
    /// Every other failure is captured inside the returned records.
    pub async fn crawl(&self, seed: &str) -> Result<CrawlOutcome, SiftError> {
        let seed = normalize_url(seed)?;
        tracing::info!("Starting crawl of {}", seed);

        // Phase 1: the seed must come back before anything else can happen
        let seed_html = fetch_page(&self.client, seed.as_str()).await?;
        let targets = discover_links(&seed, &seed_html);
        tracing::info!("Discovered {} in-scope pages", targets.len());

        // Phase 2: fan out over the discovered set
        let mut records = self.fetch_all(&seed, seed_html, targets).await;

        // Output order is defined by URL, not completion time
        records.sort_by(|a, b| a.url.cmp(&b.url));

        let page_count = records.len();
        tracing::info!(
            "Crawl of {} finished: {} records ({} failed)",
            seed,
            page_count,
            records.iter().filter(|r| r.is_error()).count()
        );

        Ok(CrawlOutcome {
            records,
            page_count,
        })
    }

    /// Fetches and extracts every target concurrently
    ///
    /// The seed's already-fetched body is reused rather than fetched twice.
    async fn fetch_all(
        &self,
        seed: &Url,
        seed_html: String,
        targets: Vec<Url>,
    ) -> Vec<PageRecord> {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_fetches));
        let mut tasks = JoinSet::new();

        for target in targets {
            if target == *seed {
                let record = extract_page(&target, &seed_html);
                tasks.spawn(async move { record });
                continue;
            }

            let client = self.client.clone();
            let semaphore = Arc::clone(&semaphore);

            tasks.spawn(async move {
                // Closed only if the semaphore is dropped, which cannot
                // happen while tasks hold clones of it
                let _permit = semaphore.acquire().await.expect("semaphore closed");

                match fetch_page(&client, target.as_str()).await {
                    Ok(html) => extract_page(&target, &html),
                    Err(e) => {
                        tracing::warn!("Failed to fetch {}: {}", target, e);
                        PageRecord::fetch_failed(&target, e.to_record_message())
                    }
                }
            });
        }

        let mut records = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(record) => records.push(record),
                Err(e) => tracing::error!("Page task panicked: {}", e),
            }
        }
        records
    }
}
