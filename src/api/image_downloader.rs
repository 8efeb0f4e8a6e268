//! GIF image download.

use async_trait::async_trait;
use std::io::Cursor;
use std::sync::Arc;
use tracing::debug;

use crate::models::GifImage;
use crate::traits::{Headers, HttpClient, ImageFetcher};

#[derive(Debug, thiserror::Error)]
enum DownloadError {
    #[error("{0}")]
    Http(#[from] crate::traits::HttpError),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("undecodable image: {0}")]
    Decode(String),
}

/// Fetches an image and reads its dimensions.
///
/// Only the header is decoded, so large GIFs are not expanded into frames.
#[derive(Clone)]
pub struct ImageDownloader {
    http: Arc<dyn HttpClient>,
}

impl ImageDownloader {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    async fn download(&self, url: &str) -> Result<GifImage, DownloadError> {
        let response = self.http.get(url, &Headers::new()).await?;
        if response.status != 200 {
            return Err(DownloadError::Status(response.status));
        }

        let (width, height) = image::ImageReader::new(Cursor::new(&response.body))
            .with_guessed_format()
            .map_err(|e| DownloadError::Decode(e.to_string()))?
            .into_dimensions()
            .map_err(|e| DownloadError::Decode(e.to_string()))?;

        Ok(GifImage {
            bytes: response.body,
            width,
            height,
        })
    }
}

#[async_trait]
impl ImageFetcher for ImageDownloader {
    async fn fetch_image(&self, url: &str) -> Option<GifImage> {
        match self.download(url).await {
            Ok(image) => Some(image),
            Err(e) => {
                debug!(url, "Image download failed: {}", e);
                None
            }
        }
    }
}
