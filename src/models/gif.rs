//! Domain records produced by the GIF API client.
//!
//! Instances are created fresh per API response and never mutated; the next
//! response replaces them wholesale.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Display title used when the provider sends no usable title.
pub const NO_TITLE: &str = "no title";

/// One entry of a search or featured page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    /// Opaque provider identifier, unique per item
    pub id: String,
    /// Absolute URL to a renderable GIF
    pub gif_url: String,
    /// Display title, never empty
    pub text: String,
}

impl SearchResult {
    /// Create a search result, substituting [`NO_TITLE`] for a missing or
    /// blank title.
    pub fn new(id: impl Into<String>, gif_url: impl Into<String>, text: Option<String>) -> Self {
        Self {
            id: id.into(),
            gif_url: gif_url.into(),
            text: title_or_default(text),
        }
    }
}

/// Detail record for a single GIF, returned by the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifDetail {
    /// Matches the [`SearchResult::id`] it was looked up for
    pub id: String,
    pub gif_url: String,
    pub text: String,
    pub shares: u64,
    /// Provider order is preserved
    pub tags: Vec<String>,
}

/// A downloaded and decoded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GifImage {
    /// Raw encoded bytes as served
    pub bytes: Bytes,
    pub width: u32,
    pub height: u32,
}

pub(crate) fn title_or_default(title: Option<String>) -> String {
    match title {
        Some(title) if !title.trim().is_empty() => title,
        _ => NO_TITLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_keeps_title() {
        let result = SearchResult::new("1", "u1", Some("Cat".to_string()));
        assert_eq!(result.text, "Cat");
        assert_eq!(result.gif_url, "u1");
    }

    #[test]
    fn test_search_result_defaults_missing_title() {
        let result = SearchResult::new("1", "u1", None);
        assert_eq!(result.text, NO_TITLE);
    }

    #[test]
    fn test_search_result_defaults_blank_title() {
        let result = SearchResult::new("1", "u1", Some("   ".to_string()));
        assert_eq!(result.text, NO_TITLE);
    }

    #[test]
    fn test_gif_detail_serializes_tags_in_order() {
        let detail = GifDetail {
            id: "42".to_string(),
            gif_url: "https://media.example/42.gif".to_string(),
            text: "Dance".to_string(),
            shares: 3,
            tags: vec!["b".to_string(), "a".to_string()],
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["tags"], serde_json::json!(["b", "a"]));
        assert_eq!(json["shares"], 3);
    }
}
