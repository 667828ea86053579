//! HTTP fetcher for the crawl engine
//!
//! A single shared client is built at engine construction and reused for
//! every request in a run. Each request is independently bounded by the
//! configured timeout, so one slow page never blocks its siblings.

use crate::config::CrawlerConfig;
use crate::CrawlError;
use reqwest::Client;
use std::time::Duration;

/// How much of a non-2xx response body is kept in the error
const ERROR_BODY_LIMIT: usize = 200;

/// Builds the shared HTTP client for a crawl run
///
/// The client carries the configured user agent and per-request timeout,
/// follows redirects, and accepts compressed responses.
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, CrawlError> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(config.request_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
        .map_err(CrawlError::Client)
}

/// Fetches a page and returns its raw body
///
/// Returns `CrawlError::Status` on a non-2xx response (carrying the status
/// code and a truncated body snippet) and `CrawlError::Network` on
/// transport-level failures such as timeouts, DNS errors, or connection
/// resets.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, CrawlError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| CrawlError::Network {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let snippet: String = body.chars().take(ERROR_BODY_LIMIT).collect();
        return Err(CrawlError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            body: snippet,
        });
    }

    response.text().await.map_err(|source| CrawlError::Network {
        url: url.to_string(),
        source,
    })
}
