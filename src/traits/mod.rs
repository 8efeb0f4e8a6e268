//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET against the provider
//! - [`GifApi`] - the search, trending and lookup queries
//! - [`ImageFetcher`] - download and decode a GIF for display

pub mod gif_api;
pub mod http;
pub mod image_fetcher;

pub use gif_api::GifApi;
pub use http::{Headers, HttpClient, HttpError, Response};
pub use image_fetcher::ImageFetcher;
