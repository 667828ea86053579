//! Content extraction: turning raw markup into a page record
//!
//! Extraction never fails. Malformed or sparse markup degrades to empty
//! fields, so every fetched page yields a usable record.

use crate::record::{MetadataValue, PageRecord};
use crate::url::path_segments;
use chrono::Utc;
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;
use url::Url;

/// Extracts a structured record from a page's markup
///
/// Title derivation, first match wins: the `og:title` meta attribute, the
/// document `<title>`, then the first `<h1>`. Headings cover levels 1-3 in
/// document order; paragraph and heading texts are whitespace-collapsed
/// with empty results dropped. Breadcrumb texts land in metadata under
/// `breadcrumbs` when a breadcrumb-style container exists, and a
/// `heading_count` entry accompanies any non-empty heading list.
pub fn extract_page(url: &Url, html: &str) -> PageRecord {
    let document = Html::parse_document(html);

    let title = extract_title(&document);
    let headings = extract_headings(&document);
    let paragraphs = extract_paragraphs(&document);
    let breadcrumbs = extract_breadcrumbs(&document);

    let mut metadata = BTreeMap::new();
    if let Some(crumbs) = breadcrumbs {
        metadata.insert("breadcrumbs".to_string(), MetadataValue::TextList(crumbs));
    }
    if !headings.is_empty() {
        metadata.insert(
            "heading_count".to_string(),
            MetadataValue::Text(headings.len().to_string()),
        );
    }

    let content = paragraphs.join("\n\n");

    PageRecord {
        url: url.to_string(),
        title,
        headings,
        paragraphs,
        content,
        metadata,
        source: url.host_str().unwrap_or_default().to_string(),
        tags: path_segments(url),
        retrieved_at: Utc::now(),
        error: None,
    }
}

fn extract_title(document: &Html) -> Option<String> {
    if let Ok(selector) = Selector::parse(r#"meta[property="og:title"]"#) {
        if let Some(content) = document
            .select(&selector)
            .next()
            .and_then(|element| element.value().attr("content"))
        {
            let trimmed = content.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }

    if let Ok(selector) = Selector::parse("title") {
        if let Some(element) = document.select(&selector).next() {
            let text = collapse_whitespace(&element.text().collect::<Vec<_>>().join(" "));
            if !text.is_empty() {
                return Some(text);
            }
        }
    }

    if let Ok(selector) = Selector::parse("h1") {
        if let Some(element) = document.select(&selector).next() {
            let text = element_text(&element);
            if !text.is_empty() {
                return Some(text);
            }
        }
    }

    None
}

fn extract_headings(document: &Html) -> Vec<String> {
    let Ok(selector) = Selector::parse("h1, h2, h3") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|element| element_text(&element))
        .filter(|text| !text.is_empty())
        .collect()
}

fn extract_paragraphs(document: &Html) -> Vec<String> {
    let Ok(selector) = Selector::parse("p") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|element| element_text(&element))
        .filter(|text| !text.is_empty())
        .collect()
}

/// Returns breadcrumb item texts, or None when no breadcrumb container exists
fn extract_breadcrumbs(document: &Html) -> Option<Vec<String>> {
    let container_selector = Selector::parse(r#"[class*="breadcrumb"]"#).ok()?;
    let item_selector = Selector::parse("li, span, a").ok()?;

    let container = document.select(&container_selector).next()?;

    let items: Vec<String> = container
        .select(&item_selector)
        .map(|element| element_text(&element))
        .filter(|text| !text.is_empty())
        .collect();

    Some(items)
}

/// Collects an element's text with inner whitespace collapsed to single spaces
fn element_text(element: &ElementRef) -> String {
    collapse_whitespace(&element.text().collect::<Vec<_>>().join(" "))
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://example.edu/programs/cs").unwrap()
    }

    #[test]
    fn test_title_prefers_og_title() {
        let html = r#"<html><head>
            <meta property="og:title" content="CS Program" />
            <title>Fallback</title>
        </head><body><h1>Heading</h1></body></html>"#;

        let record = extract_page(&page_url(), html);
        assert_eq!(record.title.as_deref(), Some("CS Program"));
    }

    #[test]
    fn test_title_falls_back_to_title_tag() {
        let html = r#"<html><head><title> Degree Programs </title></head><body></body></html>"#;
        let record = extract_page(&page_url(), html);
        assert_eq!(record.title.as_deref(), Some("Degree Programs"));
    }

    #[test]
    fn test_title_falls_back_to_h1() {
        let html = r#"<html><body><h1>Computer Science</h1></body></html>"#;
        let record = extract_page(&page_url(), html);
        assert_eq!(record.title.as_deref(), Some("Computer Science"));
    }

    #[test]
    fn test_empty_og_title_skipped() {
        let html = r#"<html><head>
            <meta property="og:title" content="  " />
            <title>Real Title</title>
        </head><body></body></html>"#;

        let record = extract_page(&page_url(), html);
        assert_eq!(record.title.as_deref(), Some("Real Title"));
    }

    #[test]
    fn test_no_title_at_all() {
        let html = r#"<html><body><p>Text only.</p></body></html>"#;
        let record = extract_page(&page_url(), html);
        assert_eq!(record.title, None);
    }

    #[test]
    fn test_headings_levels_one_to_three() {
        let html = r#"<html><body>
            <h1>One</h1>
            <h2>Two</h2>
            <h3>Three</h3>
            <h4>Four</h4>
        </body></html>"#;

        let record = extract_page(&page_url(), html);
        assert_eq!(record.headings, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_headings_document_order() {
        let html = r#"<html><body>
            <h2>First</h2>
            <h1>Second</h1>
            <h3>Third</h3>
        </body></html>"#;

        let record = extract_page(&page_url(), html);
        assert_eq!(record.headings, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_whitespace_collapsed() {
        let html = "<html><body><h1>  Spread \n  Out\tHeading </h1><p>Multi\n\nline   text.</p></body></html>";
        let record = extract_page(&page_url(), html);
        assert_eq!(record.headings, vec!["Spread Out Heading"]);
        assert_eq!(record.paragraphs, vec!["Multi line text."]);
    }

    #[test]
    fn test_empty_elements_dropped() {
        let html = r#"<html><body><h2>   </h2><p></p><p>Kept.</p></body></html>"#;
        let record = extract_page(&page_url(), html);
        assert!(record.headings.is_empty());
        assert_eq!(record.paragraphs, vec!["Kept."]);
    }

    #[test]
    fn test_content_derived_from_paragraphs() {
        let html = r#"<html><body><p>First.</p><p>Second.</p></body></html>"#;
        let record = extract_page(&page_url(), html);
        assert_eq!(record.content, "First.\n\nSecond.");
        assert_eq!(record.content, record.paragraphs.join("\n\n"));
    }

    #[test]
    fn test_breadcrumbs_extracted() {
        let html = r#"<html><body>
            <nav class="site-breadcrumbs">
                <a href="/">Home</a>
                <a href="/programs">Programs</a>
                <span>CS</span>
            </nav>
        </body></html>"#;

        let record = extract_page(&page_url(), html);
        assert_eq!(
            record.metadata.get("breadcrumbs"),
            Some(&MetadataValue::TextList(vec![
                "Home".to_string(),
                "Programs".to_string(),
                "CS".to_string(),
            ]))
        );
    }

    #[test]
    fn test_no_breadcrumb_container_no_metadata_key() {
        let html = r#"<html><body><p>Plain.</p></body></html>"#;
        let record = extract_page(&page_url(), html);
        assert!(!record.metadata.contains_key("breadcrumbs"));
    }

    #[test]
    fn test_heading_count_metadata() {
        let html = r#"<html><body><h1>A</h1><h2>B</h2></body></html>"#;
        let record = extract_page(&page_url(), html);
        assert_eq!(
            record.metadata.get("heading_count"),
            Some(&MetadataValue::Text("2".to_string()))
        );
    }

    #[test]
    fn test_tags_and_source_from_url() {
        let html = r#"<html><body></body></html>"#;
        let record = extract_page(&page_url(), html);
        assert_eq!(record.source, "example.edu");
        assert_eq!(record.tags, vec!["programs", "cs"]);
    }

    #[test]
    fn test_malformed_markup_degrades_gracefully() {
        let html = "<html><body><p>Unclosed<div><h1>Still here";
        let record = extract_page(&page_url(), html);
        assert!(record.error.is_none());
        assert_eq!(record.headings, vec!["Still here"]);
    }

    #[test]
    fn test_garbage_input_yields_empty_record() {
        let record = extract_page(&page_url(), "%%% not markup at all %%%");
        assert!(record.error.is_none());
        assert!(record.headings.is_empty());
        assert!(record.paragraphs.is_empty());
        assert!(record.content.is_empty());
    }
}
