//! Provider response shapes and their mapping into domain records.
//!
//! Search and trending share [`ListResponse`]; the lookup endpoint returns
//! [`LookupResponse`]. Field names follow the provider's JSON.

use serde::Deserialize;
use tracing::debug;

use super::gif::{title_or_default, GifDetail, SearchResult};

/// Body of the search and trending endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub results: Vec<ListEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListEntry {
    pub id: String,
    #[serde(default)]
    pub h1_title: Option<String>,
    pub media: Vec<Media>,
}

/// Body of the lookup endpoint.
///
/// The provider answers with a list even for a single id, and the list may be
/// empty for ids that look valid.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupResponse {
    pub results: Vec<LookupEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LookupEntry {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub shares: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    pub url: String,
    #[serde(default)]
    pub media: Vec<Media>,
    #[serde(default)]
    pub created: Option<f64>,
    #[serde(default)]
    pub itemurl: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Media {
    pub gif: MediaFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaFormat {
    pub url: String,
}

impl ListResponse {
    /// Map every entry that carries at least one media format.
    pub fn into_search_results(self) -> Vec<SearchResult> {
        self.results
            .into_iter()
            .filter_map(ListEntry::into_search_result)
            .collect()
    }
}

impl ListEntry {
    fn into_search_result(self) -> Option<SearchResult> {
        let Some(media) = self.media.into_iter().next() else {
            debug!(id = %self.id, "Skipping result without media");
            return None;
        };
        Some(SearchResult::new(self.id, media.gif.url, self.h1_title))
    }
}

impl LookupResponse {
    pub fn into_details(self) -> Vec<GifDetail> {
        self.results.into_iter().map(LookupEntry::into_detail).collect()
    }
}

impl LookupEntry {
    fn into_detail(self) -> GifDetail {
        // Prefer the renderable media URL; `url` is the share page.
        let gif_url = self
            .media
            .into_iter()
            .next()
            .map(|media| media.gif.url)
            .unwrap_or(self.url);

        GifDetail {
            id: self.id,
            gif_url,
            text: title_or_default(self.title),
            shares: self.shares,
            tags: self.tags,
        }
    }
}
