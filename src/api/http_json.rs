//! Typed JSON GET requests.

use reqwest::Url;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

use super::endpoints::redacted;
use crate::error::{ApiError, ApiResult};
use crate::traits::{Headers, HttpClient};

/// Issues a GET and decodes a 200 response body as `T`.
///
/// Every failure (transport, non-200 status, decode) comes back as an
/// [`ApiError`]; nothing panics and nothing is retried.
#[derive(Clone)]
pub struct HttpJsonClient {
    http: Arc<dyn HttpClient>,
}

impl HttpJsonClient {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// Perform exactly one GET against `url` and decode the body.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &Url) -> ApiResult<T> {
        let shown = redacted(url);
        debug!(url = %shown, "GET");

        let response = self.http.get(url.as_str(), &Headers::new()).await?;

        if response.status != 200 {
            return Err(ApiError::Status {
                status: response.status,
                url: shown,
            });
        }

        response.json::<T>().map_err(|e| ApiError::Decode {
            url: shown,
            message: e.to_string(),
        })
    }
}
