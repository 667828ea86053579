//! Configuration module for pagesift
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every setting has a default, so a configuration file is optional.
//!
//! # Example
//!
//! ```no_run
//! use pagesift::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Request timeout: {}s", config.crawler.request_timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use types::{ChunkingConfig, Config, CrawlerConfig, OutputConfig};
