//! Choosing between search results and featured results.

use futures::stream::BoxStream;
use futures::{Stream, StreamExt};
use std::sync::Arc;
use tracing::debug;

use crate::models::SearchResult;
use crate::reactive::{combine_latest, PipelineStreamExt};
use crate::traits::GifApi;

/// The list to show given the latest search and featured lists.
///
/// Search results win whenever there are any; otherwise the featured list
/// is shown. The two are never mixed.
pub fn recompute(search: &[SearchResult], featured: &[SearchResult]) -> Vec<SearchResult> {
    if search.is_empty() {
        featured.to_vec()
    } else {
        search.to_vec()
    }
}

/// Produces the display list from the search pipeline and a single featured
/// fetch.
///
/// Both inputs start out empty, so the first emission is `[]`. The featured
/// fetch is issued once, when the display stream is first polled.
#[derive(Clone)]
pub struct DisplayListSelector {
    api: Arc<dyn GifApi>,
}

impl DisplayListSelector {
    pub fn new(api: Arc<dyn GifApi>) -> Self {
        Self { api }
    }

    pub fn display_list<S>(&self, search_results: S) -> BoxStream<'static, Vec<SearchResult>>
    where
        S: Stream<Item = Vec<SearchResult>> + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let featured = futures::stream::once(async move {
            let featured = api.featured_gifs().await;
            debug!(count = featured.len(), "Featured results loaded");
            featured
        });

        Self::select(search_results, featured)
    }

    /// Combine already-built search and featured streams.
    pub fn select<S, F>(search_results: S, featured: F) -> BoxStream<'static, Vec<SearchResult>>
    where
        S: Stream<Item = Vec<SearchResult>> + Send + 'static,
        F: Stream<Item = Vec<SearchResult>> + Send + 'static,
    {
        combine_latest(
            search_results.start_with(Vec::new()),
            featured.start_with(Vec::new()),
        )
        .map(|(search, featured)| recompute(&search, &featured))
        .boxed()
    }
}
