//! GIF provider client.
//!
//! Wraps [`HttpJsonClient`] with the three named queries. The `try_*`
//! methods report what went wrong; the [`GifApi`] implementation is what the
//! pipelines use, and it turns every failure into an empty list.

use async_trait::async_trait;
use std::sync::Arc;

use super::endpoints::Endpoints;
use super::http_json::HttpJsonClient;
use crate::adapters::ReqwestHttpClient;
use crate::config::BrowserConfig;
use crate::error::{ApiResult, OrEmpty};
use crate::models::{GifDetail, ListResponse, LookupResponse, SearchResult};
use crate::traits::{GifApi, HttpClient, HttpError};

/// Client for the provider's search, trending and lookup endpoints.
///
/// # Example
///
/// ```ignore
/// use gifgrid::api::GifApiClient;
/// use gifgrid::config::BrowserConfig;
/// use gifgrid::traits::GifApi;
///
/// let client = GifApiClient::from_config(&BrowserConfig::from_env()?)?;
/// let cats = client.search_gifs("cat").await; // [] on any failure
/// ```
#[derive(Clone)]
pub struct GifApiClient {
    json: HttpJsonClient,
    endpoints: Endpoints,
}

impl GifApiClient {
    /// Create a client that sends requests through `http`.
    pub fn new(config: &BrowserConfig, http: Arc<dyn HttpClient>) -> Self {
        Self {
            json: HttpJsonClient::new(http),
            endpoints: Endpoints::new(config),
        }
    }

    /// Create a client backed by reqwest, honoring the configured timeout.
    pub fn from_config(config: &BrowserConfig) -> Result<Self, HttpError> {
        let http = ReqwestHttpClient::from_config(config)?;
        Ok(Self::new(config, Arc::new(http)))
    }

    pub async fn try_search_gifs(&self, query: &str) -> ApiResult<Vec<SearchResult>> {
        let url = self.endpoints.search(query)?;
        let page: ListResponse = self.json.fetch_json(&url).await?;
        Ok(page.into_search_results())
    }

    pub async fn try_featured_gifs(&self) -> ApiResult<Vec<SearchResult>> {
        let url = self.endpoints.trending()?;
        let page: ListResponse = self.json.fetch_json(&url).await?;
        Ok(page.into_search_results())
    }

    /// Look up `id`. `Ok(vec![])` is a valid answer, not an error.
    pub async fn try_gif_info(&self, id: &str) -> ApiResult<Vec<GifDetail>> {
        let url = self.endpoints.lookup(id)?;
        let page: LookupResponse = self.json.fetch_json(&url).await?;
        Ok(page.into_details())
    }
}

#[async_trait]
impl GifApi for GifApiClient {
    async fn search_gifs(&self, query: &str) -> Vec<SearchResult> {
        self.try_search_gifs(query).await.or_empty("search_gifs")
    }

    async fn featured_gifs(&self) -> Vec<SearchResult> {
        self.try_featured_gifs().await.or_empty("featured_gifs")
    }

    async fn gif_info(&self, id: &str) -> Vec<GifDetail> {
        self.try_gif_info(id).await.or_empty("gif_info")
    }
}
