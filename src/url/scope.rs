//! The in-scope test that bounds a crawl to one section of a site
//!
//! A candidate URL is in scope only if its host exactly matches the seed's
//! host and its path sits at or under the seed's path prefix. This is what
//! keeps a run from spidering the whole domain.

use url::Url;

/// Returns the path prefix a seed URL admits
///
/// The seed's path with any trailing slash removed; an empty or root path
/// admits the whole host.
pub fn scope_prefix(seed: &Url) -> String {
    let stripped = seed.path().trim_end_matches('/');
    if stripped.is_empty() {
        "/".to_string()
    } else {
        stripped.to_string()
    }
}

/// Tests whether a candidate URL falls inside the seed's crawl scope
///
/// Both URLs are expected to be normalized already. The path comparison is
/// a plain string-prefix test against the trailing-slash-stripped seed
/// path, so `/programs` admits `/programs`, `/programs/cs`, and
/// `/programs/` alike.
pub fn in_scope(seed: &Url, candidate: &Url) -> bool {
    if candidate.host_str() != seed.host_str()
        || candidate.port_or_known_default() != seed.port_or_known_default()
    {
        return false;
    }

    candidate.path().starts_with(&scope_prefix(seed))
}
