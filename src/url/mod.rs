//! URL handling module for pagesift
//!
//! This module provides URL normalization, path-segment extraction, and the
//! same-site scope test that keeps a crawl bounded to one section of a site.

mod normalize;
mod scope;

pub use normalize::normalize_url;
pub use scope::{in_scope, scope_prefix};

use url::Url;

/// Returns the non-empty path segments of a URL, in order
///
/// These double as the coarse topical tags attached to every page record.
pub fn path_segments(url: &Url) -> Vec<String> {
    url.path()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
        .collect()
}
