//! Search text to search results.

use futures::stream::BoxStream;
use futures::{Stream, StreamExt};
use std::sync::Arc;
use tracing::debug;

use crate::models::SearchResult;
use crate::reactive::PipelineStreamExt;
use crate::traits::GifApi;

/// Turns search-text changes into result lists.
///
/// Every text change starts a search; there is no debounce and an empty
/// string is searched like any other. If a newer text arrives while a search
/// is still in flight, the older search is dropped and never emits.
#[derive(Clone)]
pub struct SearchPipeline {
    api: Arc<dyn GifApi>,
}

impl SearchPipeline {
    pub fn new(api: Arc<dyn GifApi>) -> Self {
        Self { api }
    }

    /// One emission per search that resolved without being superseded.
    pub fn results<S>(&self, search_text: S) -> BoxStream<'static, Vec<SearchResult>>
    where
        S: Stream<Item = String> + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        search_text
            .map_latest(move |query| {
                debug!(query = %query, "Search text changed");
                let api = Arc::clone(&api);
                async move { api.search_gifs(&query).await }
            })
            .boxed()
    }
}
