//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockGifApi`] - scripted provider with releasable held responses

pub mod gif_api;
pub mod http;

pub use gif_api::{ApiCall, Gate, MockGifApi};
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
