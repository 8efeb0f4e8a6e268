//! Image fetching trait abstraction.

use async_trait::async_trait;

use crate::models::GifImage;

/// Downloads and decodes the image behind a URL.
///
/// Returns `None` on any failure; callers render a placeholder.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch_image(&self, url: &str) -> Option<GifImage>;
}
