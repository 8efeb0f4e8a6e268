//! GIF provider trait abstraction.
//!
//! The pipelines depend on this trait rather than on the HTTP client so
//! they can be driven by [`MockGifApi`](crate::adapters::mock::MockGifApi)
//! with test-controlled completion order.

use async_trait::async_trait;

use crate::models::{GifDetail, SearchResult};

/// The three provider queries the browser needs.
///
/// None of these can fail: a transport error, a bad status or an
/// undecodable body all come back as an empty list. Futures are lazy; no
/// request is made until the returned future is polled.
#[async_trait]
pub trait GifApi: Send + Sync {
    /// Search for GIFs matching `query`. An empty query is still sent.
    async fn search_gifs(&self, query: &str) -> Vec<SearchResult>;

    /// Fetch the provider's trending page.
    async fn featured_gifs(&self) -> Vec<SearchResult>;

    /// Look up details for a single id.
    ///
    /// An empty list is a normal outcome; the provider returns one for some
    /// ids that look valid.
    async fn gif_info(&self, id: &str) -> Vec<GifDetail>;
}
