//! Indexing preparation: splitting page content into overlapping chunks
//!
//! Downstream indexers embed page text in chunks and skip chunks they have
//! already seen. Chunk identifiers are derived from the page URL and chunk
//! index alone, so re-running a crawl and re-indexing the same pages is
//! idempotent.

use crate::config::ChunkingConfig;
use crate::record::PageRecord;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// A chunk of page text ready for embedding
#[derive(Debug, Clone, Serialize)]
pub struct TextChunk {
    /// Stable identifier: sha256 of the page URL and chunk index
    pub id: String,

    /// Position of this chunk within its page
    pub index: usize,

    /// The chunk text
    pub text: String,
}

/// Assembles the full text a page contributes to the index
///
/// Content first, then headings, then paragraphs, blank-line separated.
/// Headings repeat text already inside `content` only when pages use the
/// same phrasing for both; the index tolerates that duplication.
pub fn page_index_text(record: &PageRecord) -> String {
    let mut parts = Vec::new();

    if !record.content.is_empty() {
        parts.push(record.content.clone());
    }
    if !record.headings.is_empty() {
        parts.push(record.headings.join("\n"));
    }
    if !record.paragraphs.is_empty() {
        parts.push(record.paragraphs.join("\n"));
    }

    parts.join("\n\n")
}

/// Splits a record's assembled text into chunks
///
/// Error-bearing records and records below the minimum content length
/// yield no chunks.
pub fn split_record(record: &PageRecord, config: &ChunkingConfig) -> Vec<TextChunk> {
    if record.is_error() {
        return Vec::new();
    }
    split_text(&record.url, &page_index_text(record), config)
}

/// Splits text into bounded-size character chunks with overlap
///
/// Each chunk holds at most `chunk_size` characters. Chunks prefer to end
/// at a paragraph break or space inside the window; consecutive chunks
/// share `chunk_overlap` characters of context. Text shorter than
/// `min_content_length` yields no chunks.
pub fn split_text(source_key: &str, text: &str, config: &ChunkingConfig) -> Vec<TextChunk> {
    let chars: Vec<char> = text.trim().chars().collect();
    if chars.len() < config.min_content_length {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let hard_end = (start + config.chunk_size).min(chars.len());
        let end = if hard_end < chars.len() {
            find_break(&chars, start, hard_end)
        } else {
            hard_end
        };

        let chunk_text: String = chars[start..end].iter().collect();
        let trimmed = chunk_text.trim();
        if !trimmed.is_empty() {
            chunks.push(TextChunk {
                id: chunk_id(source_key, chunks.len()),
                index: chunks.len(),
                text: trimmed.to_string(),
            });
        }

        if end >= chars.len() {
            break;
        }

        // Overlap carries context across the boundary; the max() guarantees
        // forward progress even with degenerate settings
        start = (end.saturating_sub(config.chunk_overlap)).max(start + 1);
    }

    chunks
}

/// Picks the latest natural break inside the window, if any
///
/// Prefers a paragraph boundary, then a space, searching backwards from
/// the hard limit but never past the window's midpoint.
fn find_break(chars: &[char], start: usize, hard_end: usize) -> usize {
    let midpoint = start + (hard_end - start) / 2;

    for i in (midpoint..hard_end).rev() {
        if chars[i] == '\n' {
            return i + 1;
        }
    }

    for i in (midpoint..hard_end).rev() {
        if chars[i] == ' ' {
            return i + 1;
        }
    }

    hard_end
}

/// Stable chunk identifier for idempotent re-indexing
fn chunk_id(source_key: &str, index: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(source_key.as_bytes());
    hasher.update(b"#");
    hasher.update(index.to_string().as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn config() -> ChunkingConfig {
        ChunkingConfig {
            chunk_size: 100,
            chunk_overlap: 20,
            min_content_length: 50,
        }
    }

    #[test]
    fn test_short_text_yields_no_chunks() {
        let chunks = split_text("https://example.edu/a", "too short", &config());
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_single_chunk_for_small_text() {
        let text = "a".repeat(80);
        let chunks = split_text("https://example.edu/a", &text, &config());
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, text);
        assert_eq!(chunks[0].index, 0);
    }

    #[test]
    fn test_long_text_splits_with_overlap() {
        let text = "word ".repeat(100);
        let chunks = split_text("https://example.edu/a", &text, &config());

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.text.chars().count() <= 100);
        }

        // Each boundary carries shared context
        for pair in chunks.windows(2) {
            let tail: String = pair[0].text.chars().rev().take(10).collect();
            let tail: String = tail.chars().rev().collect();
            assert!(
                pair[1].text.contains(tail.trim()),
                "no overlap between consecutive chunks"
            );
        }
    }

    #[test]
    fn test_prefers_paragraph_breaks() {
        let text = format!("{}\n\n{}", "a".repeat(70), "b".repeat(70));
        let chunks = split_text("https://example.edu/a", &text, &config());

        assert!(chunks.len() >= 2);
        assert!(chunks[0].text.chars().all(|c| c == 'a'));
    }

    #[test]
    fn test_chunk_ids_stable_across_runs() {
        let text = "word ".repeat(100);
        let first = split_text("https://example.edu/a", &text, &config());
        let second = split_text("https://example.edu/a", &text, &config());

        let first_ids: Vec<_> = first.iter().map(|c| c.id.clone()).collect();
        let second_ids: Vec<_> = second.iter().map(|c| c.id.clone()).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn test_chunk_ids_differ_between_pages() {
        let text = "word ".repeat(100);
        let a = split_text("https://example.edu/a", &text, &config());
        let b = split_text("https://example.edu/b", &text, &config());
        assert_ne!(a[0].id, b[0].id);
    }

    #[test]
    fn test_error_record_yields_no_chunks() {
        let url = Url::parse("https://example.edu/down").unwrap();
        let record = PageRecord::fetch_failed(&url, "HTTP 503".to_string());
        assert!(split_record(&record, &config()).is_empty());
    }

    #[test]
    fn test_page_index_text_assembly() {
        let url = Url::parse("https://example.edu/p").unwrap();
        let mut record = PageRecord::fetch_failed(&url, String::new());
        record.error = None;
        record.headings = vec!["Head".to_string()];
        record.paragraphs = vec!["Para one.".to_string(), "Para two.".to_string()];
        record.content = record.paragraphs.join("\n\n");

        let text = page_index_text(&record);
        assert_eq!(
            text,
            "Para one.\n\nPara two.\n\nHead\n\nPara one.\nPara two."
        );
    }

    #[test]
    fn test_unicode_boundaries_safe() {
        let text = "ü".repeat(260);
        let chunks = split_text("https://example.edu/u", &text, &config());
        assert!(!chunks.is_empty());
        let total: usize = chunks.iter().map(|c| c.text.chars().count()).sum();
        assert!(total >= 260);
    }
}
