//! Page records: the normalized output unit of a crawl
//!
//! One `PageRecord` is produced per discovered URL. Records are created once
//! during a crawl run and never mutated afterwards; a run yields a flat,
//! URL-ordered sequence of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

/// A metadata value: either a single string or an ordered list of strings
///
/// Serialized untagged, so `Text` round-trips as a JSON string and
/// `TextList` as a JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Text(String),
    TextList(Vec<String>),
}

/// Structured content extracted from a single crawled page
///
/// Exactly one of the following holds per record: either the content fields
/// are populated and `error` is `None`, or `error` is set and every content
/// field is empty. `content` is always derived from `paragraphs` and is
/// never set independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    /// Normalized absolute URL; unique key within one crawl run
    pub url: String,

    /// Page title, if any could be derived
    pub title: Option<String>,

    /// Level 1-3 headings in document order
    pub headings: Vec<String>,

    /// Non-empty, whitespace-normalized paragraph texts in document order
    pub paragraphs: Vec<String>,

    /// All paragraphs joined with a blank line
    pub content: String,

    /// Extraction metadata such as breadcrumbs and heading counts
    pub metadata: BTreeMap<String, MetadataValue>,

    /// Host the page was fetched from
    pub source: String,

    /// Non-empty path segments of the URL, used as coarse topical labels
    pub tags: Vec<String>,

    /// Timestamp of fetch completion
    pub retrieved_at: DateTime<Utc>,

    /// Present only when the fetch failed; content fields are empty then
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PageRecord {
    /// Creates a record for a page whose fetch failed
    ///
    /// Tags and source are still derived from the URL so a failed page
    /// remains attributable to its place in the site.
    pub fn fetch_failed(url: &Url, error: String) -> Self {
        Self {
            url: url.to_string(),
            title: None,
            headings: Vec::new(),
            paragraphs: Vec::new(),
            content: String::new(),
            metadata: BTreeMap::new(),
            source: url.host_str().unwrap_or_default().to_string(),
            tags: crate::url::path_segments(url),
            retrieved_at: Utc::now(),
            error: Some(error),
        }
    }

    /// True when this record carries an error instead of content
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failed_record_is_empty() {
        let url = Url::parse("https://example.edu/programs/cs").unwrap();
        let record = PageRecord::fetch_failed(&url, "HTTP 503".to_string());

        assert!(record.is_error());
        assert_eq!(record.error.as_deref(), Some("HTTP 503"));
        assert_eq!(record.title, None);
        assert!(record.headings.is_empty());
        assert!(record.paragraphs.is_empty());
        assert!(record.content.is_empty());
        assert!(record.metadata.is_empty());
    }

    #[test]
    fn test_fetch_failed_record_keeps_provenance() {
        let url = Url::parse("https://example.edu/programs/cs").unwrap();
        let record = PageRecord::fetch_failed(&url, "timeout".to_string());

        assert_eq!(record.source, "example.edu");
        assert_eq!(record.tags, vec!["programs", "cs"]);
    }

    #[test]
    fn test_metadata_value_serialization() {
        let text = MetadataValue::Text("3".to_string());
        let list = MetadataValue::TextList(vec!["Home".to_string(), "Programs".to_string()]);

        assert_eq!(serde_json::to_string(&text).unwrap(), r#""3""#);
        assert_eq!(
            serde_json::to_string(&list).unwrap(),
            r#"["Home","Programs"]"#
        );
    }

    #[test]
    fn test_metadata_value_roundtrip() {
        let parsed: MetadataValue = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(
            parsed,
            MetadataValue::TextList(vec!["a".to_string(), "b".to_string()])
        );

        let parsed: MetadataValue = serde_json::from_str(r#""single""#).unwrap();
        assert_eq!(parsed, MetadataValue::Text("single".to_string()));
    }

    #[test]
    fn test_error_field_skipped_when_absent() {
        let url = Url::parse("https://example.edu/a").unwrap();
        let mut record = PageRecord::fetch_failed(&url, "x".to_string());
        record.error = None;

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("\"error\""));
    }
}
