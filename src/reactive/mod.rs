//! Stream operators the pipelines are built from.
//!
//! `map` comes from [`futures::StreamExt`]. This module adds the two
//! operators that carry the interesting semantics:
//!
//! - [`switch_to_latest`](PipelineStreamExt::switch_to_latest): only the most
//!   recently started async computation may emit
//! - [`combine_latest`]: recompute from the latest value of each input
//!
//! # Example
//!
//! ```ignore
//! use gifgrid::reactive::PipelineStreamExt;
//!
//! let results = search_text.map_latest(move |query| {
//!     let api = Arc::clone(&api);
//!     async move { api.search_gifs(&query).await }
//! });
//! ```

mod combine_latest;
mod switch_latest;

pub use combine_latest::{combine_latest, CombineLatest};
pub use switch_latest::SwitchToLatest;

use futures::future::{self, Ready};
use futures::stream::{self, Chain, Map, Once};
use futures::{Stream, StreamExt};
use std::future::Future;

/// Extension methods for building pipelines out of streams.
pub trait PipelineStreamExt: Stream + Sized {
    /// Flatten a stream of futures, dropping any in-flight future as soon as
    /// a newer one arrives.
    fn switch_to_latest(self) -> SwitchToLatest<Self>
    where
        Self::Item: Future,
    {
        SwitchToLatest::new(self)
    }

    /// `map` each value to a future, then [`switch_to_latest`](Self::switch_to_latest).
    fn map_latest<F, Fut>(self, f: F) -> SwitchToLatest<Map<Self, F>>
    where
        F: FnMut(Self::Item) -> Fut,
        Fut: Future,
    {
        SwitchToLatest::new(self.map(f))
    }

    /// Emit `value` before anything from this stream.
    fn start_with(self, value: Self::Item) -> Chain<Once<Ready<Self::Item>>, Self> {
        stream::once(future::ready(value)).chain(self)
    }
}

impl<S: Stream> PipelineStreamExt for S {}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_start_with_prepends() {
        let out: Vec<u8> = stream::iter(vec![2u8, 3]).start_with(1).collect().await;
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_start_with_on_empty_stream() {
        let out: Vec<u8> = stream::empty().start_with(5).collect().await;
        assert_eq!(out, vec![5]);
    }
}
