//! Provider endpoint URLs.

use reqwest::Url;

use crate::config::BrowserConfig;
use crate::error::{ApiError, ApiResult};
use crate::traits::HttpError;

/// Page size for search and trending requests.
pub const RESULT_LIMIT: u32 = 30;

const SEARCH_PATH: &str = "/search";
const TRENDING_PATH: &str = "/trending";
const LOOKUP_PATH: &str = "/gifs";

/// Builds fully-qualified request URLs for the three provider queries.
#[derive(Clone)]
pub struct Endpoints {
    base_url: String,
    api_key: String,
}

impl Endpoints {
    pub fn new(config: &BrowserConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// `GET /search?q={query}&key={key}&limit=30`
    pub fn search(&self, query: &str) -> ApiResult<Url> {
        let limit = RESULT_LIMIT.to_string();
        self.build(
            SEARCH_PATH,
            &[("q", query), ("key", &self.api_key), ("limit", &limit)],
        )
    }

    /// `GET /trending?key={key}&limit=30`
    pub fn trending(&self) -> ApiResult<Url> {
        let limit = RESULT_LIMIT.to_string();
        self.build(TRENDING_PATH, &[("key", &self.api_key), ("limit", &limit)])
    }

    /// `GET /gifs?ids={id}&key={key}&media_filter=minimal`
    pub fn lookup(&self, id: &str) -> ApiResult<Url> {
        self.build(
            LOOKUP_PATH,
            &[
                ("ids", id),
                ("key", &self.api_key),
                ("media_filter", "minimal"),
            ],
        )
    }

    fn build(&self, path: &str, params: &[(&str, &str)]) -> ApiResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse_with_params(&raw, params)
            .map_err(|e| ApiError::Transport(HttpError::InvalidUrl(format!("{}: {}", raw, e))))
    }
}

/// Render `url` for logs with the API key hidden.
pub fn redacted(url: &Url) -> String {
    let mut shown = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "key" {
                "<redacted>".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();

    if !pairs.is_empty() {
        shown.query_pairs_mut().clear().extend_pairs(pairs);
    }
    shown.to_string()
}
