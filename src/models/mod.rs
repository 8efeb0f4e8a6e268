//! Data models for gifgrid.
//!
//! - [`SearchResult`], [`GifDetail`], [`GifImage`]: what the pipelines emit
//! - [`ListResponse`], [`LookupResponse`]: provider JSON, mapped into the above

mod gif;
mod wire;

pub use gif::{GifDetail, GifImage, SearchResult, NO_TITLE};
pub use wire::{ListEntry, ListResponse, LookupEntry, LookupResponse, Media, MediaFormat};
