//! Selected item to detail record.

use futures::stream::BoxStream;
use futures::{Stream, StreamExt};
use std::sync::Arc;
use tracing::debug;

use crate::models::{GifDetail, SearchResult};
use crate::reactive::PipelineStreamExt;
use crate::traits::GifApi;

/// Looks up details for each selected item.
///
/// Selecting another item while a lookup is pending drops the pending one.
/// Emissions are usually zero or one record long; an empty list means the
/// provider had nothing for that id and is not an error.
#[derive(Clone)]
pub struct DetailPipeline {
    api: Arc<dyn GifApi>,
}

impl DetailPipeline {
    pub fn new(api: Arc<dyn GifApi>) -> Self {
        Self { api }
    }

    pub fn details<S>(&self, selected: S) -> BoxStream<'static, Vec<GifDetail>>
    where
        S: Stream<Item = SearchResult> + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        selected
            .map_latest(move |item: SearchResult| {
                debug!(id = %item.id, "Looking up details");
                let api = Arc::clone(&api);
                async move {
                    let details = api.gif_info(&item.id).await;
                    if details.is_empty() {
                        debug!(id = %item.id, "No details returned");
                    }
                    details
                }
            })
            .boxed()
    }
}

/// The record a detail view shows: the first one, if any.
pub fn first_detail(details: &[GifDetail]) -> Option<&GifDetail> {
    details.first()
}
