//! Pagesift: a site-section crawler and structured-content extractor
//!
//! This crate crawls one section of a website (a seed URL plus the pages it
//! links to under the seed's path) and converts each page into a normalized
//! record suitable for search and retrieval indexing.

pub mod chunking;
pub mod config;
pub mod crawler;
pub mod output;
pub mod record;
pub mod url;

use thiserror::Error;

/// Main error type for pagesift operations
#[derive(Debug, Error)]
pub enum SiftError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("Crawl error: {0}")]
    Crawl(#[from] CrawlError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("URL must include a host")]
    MissingHost,
}

/// Errors raised while fetching pages
///
/// A status or network error on the seed page aborts the whole run; the same
/// error on a discovered subpage is folded into an error-bearing record and
/// the run continues.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("HTTP {status} for {url}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Network error for {url}: {source}")]
    Network {
        url: String,
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),
}

impl CrawlError {
    /// Short human-readable form used when folding a subpage failure into
    /// an error-bearing record
    pub fn to_record_message(&self) -> String {
        match self {
            CrawlError::Status { status, .. } => format!("HTTP {}", status),
            CrawlError::Network { source, .. } => {
                if source.is_timeout() {
                    "Request timeout".to_string()
                } else if source.is_connect() {
                    "Connection failed".to_string()
                } else {
                    source.to_string()
                }
            }
            other => other.to_string(),
        }
    }
}

/// Result type alias for pagesift operations
pub type Result<T> = std::result::Result<T, SiftError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlOutcome, Crawler};
pub use record::{MetadataValue, PageRecord};
pub use url::{in_scope, normalize_url, path_segments};
