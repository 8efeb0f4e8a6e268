//! GIF provider access.
//!
//! - [`HttpJsonClient`] - one GET, status check, typed JSON decode
//! - [`Endpoints`] - search, trending and lookup URLs
//! - [`GifApiClient`] - the three named queries, implementing [`GifApi`](crate::traits::GifApi)
//! - [`ImageDownloader`] - fetch a GIF and read its dimensions

pub mod client;
pub mod endpoints;
pub mod http_json;
pub mod image_downloader;

pub use client::GifApiClient;
pub use endpoints::{Endpoints, RESULT_LIMIT};
pub use http_json::HttpJsonClient;
pub use image_downloader::ImageDownloader;
