//! Error types for gifgrid.
//!
//! Provider failures fall into three kinds (transport, status, decode) and
//! all of them end the same way: an empty result list. The types here make
//! that policy explicit:
//!
//! - [`ApiError`] / [`ApiResult`]: what went wrong on a provider call
//! - [`OrEmpty`]: the one place where an `ApiError` becomes `[]`
//! - [`ConfigError`]: startup configuration problems, reported to the user
//!
//! # Example
//!
//! ```ignore
//! use gifgrid::error::{ApiResult, OrEmpty};
//!
//! async fn featured(client: &GifApiClient) -> Vec<SearchResult> {
//!     client.try_featured_gifs().await.or_empty("featured_gifs")
//! }
//! ```

mod api;
mod config;
mod result;

pub use api::{ApiError, ApiErrorKind};
pub use config::ConfigError;
pub use result::{ApiResult, OrEmpty};
