//! Common test utilities for integration tests.
//!
//! Fixtures for provider payloads and result lists shared by the API client
//! and pipeline tests.

#![allow(dead_code)]

use gifgrid::config::BrowserConfig;
use gifgrid::models::{GifDetail, SearchResult};
use serde_json::{json, Value};

/// API key used by every test config.
pub const TEST_API_KEY: &str = "test-key";

/// Config pointing at a mock server started with `MockServer::start()`.
pub fn test_config(server_uri: &str) -> BrowserConfig {
    BrowserConfig::new(TEST_API_KEY).with_base_url(format!("{}/v1", server_uri))
}

/// A search result with a predictable URL and title.
pub fn result(id: &str) -> SearchResult {
    SearchResult::new(
        id,
        format!("https://media.example/{}.gif", id),
        Some(format!("GIF {}", id)),
    )
}

pub fn results(ids: &[&str]) -> Vec<SearchResult> {
    ids.iter().map(|id| result(id)).collect()
}

/// A detail record matching [`result`].
pub fn detail(id: &str) -> GifDetail {
    GifDetail {
        id: id.to_string(),
        gif_url: format!("https://media.example/{}.gif", id),
        text: format!("GIF {}", id),
        shares: 1,
        tags: vec!["test".to_string()],
    }
}

/// One entry of a search/trending page as the provider sends it.
pub fn list_entry(id: &str, title: Option<&str>) -> Value {
    let mut entry = json!({
        "id": id,
        "media": [{"gif": {"url": format!("https://media.example/{}.gif", id)}}]
    });
    if let Some(title) = title {
        entry["h1_title"] = json!(title);
    }
    entry
}

/// A full page body wrapping `entries`.
pub fn page(entries: Vec<Value>) -> Value {
    json!({ "results": entries, "next": "0" })
}
