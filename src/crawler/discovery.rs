//! Link discovery: finding the in-scope subpages of a seed page
//!
//! Discovery runs against the seed page only; links found on subpages are
//! never followed, so a run always terminates after one level.

use crate::url::{in_scope, normalize_url};
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use url::Url;

/// Discovers all in-scope links in a page's markup
///
/// Every `<a href>` is resolved against the seed, normalized, and kept only
/// if it shares the seed's host and sits under the seed's path prefix.
/// Non-navigational hrefs (`mailto:`, `tel:`, `javascript:`, empty, or
/// fragment-only) are skipped, as are links that fail to normalize.
///
/// The seed itself is always part of the result. The returned list is
/// deduplicated and ordered lexicographically by URL string, so the same
/// markup always yields the same sequence.
pub fn discover_links(seed: &Url, html: &str) -> Vec<Url> {
    let document = Html::parse_document(html);

    let mut discovered = BTreeSet::new();
    discovered.insert(seed.to_string());

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };

            if !is_navigational(href) {
                continue;
            }

            let Ok(resolved) = seed.join(href.trim()) else {
                continue;
            };

            let Ok(candidate) = normalize_url(resolved.as_str()) else {
                continue;
            };

            if in_scope(seed, &candidate) {
                discovered.insert(candidate.to_string());
            }
        }
    }

    discovered
        .into_iter()
        .filter_map(|u| Url::parse(&u).ok())
        .collect()
}

/// Filters out hrefs that do not lead anywhere crawlable
fn is_navigational(href: &str) -> bool {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return false;
    }

    !(href.starts_with("mailto:") || href.starts_with("tel:") || href.starts_with("javascript:"))
}
