//! The browser core: input handles and output streams.
//!
//! The presentation layer pushes user events into a [`GifBrowser`] and
//! consumes the three streams in [`BrowserStreams`]. Nothing in here knows
//! how results are rendered.

use futures::channel::mpsc::{self, UnboundedSender};
use futures::stream::BoxStream;
use std::sync::Arc;
use tracing::debug;

use crate::models::{GifDetail, SearchResult};
use crate::pipeline::{
    DetailPipeline, DisplayListSelector, NavigationCommand, SearchPipeline, SelectionRouter,
};
use crate::traits::GifApi;

/// Output side of the browser.
///
/// Each stream has exactly one consumer, so the display list's latest-value
/// cache is only ever updated from one place.
pub struct BrowserStreams {
    /// The list to render: search results if any, else featured results
    pub display_list: BoxStream<'static, Vec<SearchResult>>,
    /// Detail lookups for selected items, latest selection only
    pub detail: BoxStream<'static, Vec<GifDetail>>,
    /// One command per selection
    pub navigate: BoxStream<'static, NavigationCommand>,
}

/// Input side of the browser.
///
/// Dropping the handle ends every stream once in-flight requests settle.
///
/// # Example
///
/// ```ignore
/// use gifgrid::browser::GifBrowser;
///
/// let (browser, mut streams) = GifBrowser::new(Arc::new(client));
/// browser.on_search_text_changed("cat");
/// while let Some(list) = streams.display_list.next().await {
///     render(&list);
/// }
/// ```
pub struct GifBrowser {
    search_text: UnboundedSender<String>,
    taps: UnboundedSender<SearchResult>,
    detail_requests: UnboundedSender<SearchResult>,
}

impl GifBrowser {
    /// Wire up the pipelines against `api`.
    ///
    /// The featured fetch is issued when `display_list` is first polled.
    pub fn new(api: Arc<dyn GifApi>) -> (Self, BrowserStreams) {
        let (search_tx, search_rx) = mpsc::unbounded();
        let (tap_tx, tap_rx) = mpsc::unbounded();
        let (detail_tx, detail_rx) = mpsc::unbounded();

        let search_results = SearchPipeline::new(Arc::clone(&api)).results(search_rx);
        let display_list = DisplayListSelector::new(Arc::clone(&api)).display_list(search_results);
        let detail = DetailPipeline::new(api).details(detail_rx);
        let navigate = SelectionRouter::route(tap_rx);

        let browser = Self {
            search_text: search_tx,
            taps: tap_tx,
            detail_requests: detail_tx,
        };
        let streams = BrowserStreams {
            display_list,
            detail,
            navigate,
        };
        (browser, streams)
    }

    /// Feed a search-text change. An empty string clears the search.
    pub fn on_search_text_changed(&self, text: impl Into<String>) {
        if self.search_text.unbounded_send(text.into()).is_err() {
            debug!("Display list consumer gone, dropping search text");
        }
    }

    /// Feed a selection. Produces a navigation command and a detail lookup.
    pub fn on_item_selected(&self, item: SearchResult) {
        if self.taps.unbounded_send(item.clone()).is_err() {
            debug!("Navigation consumer gone, dropping selection");
        }
        if self.detail_requests.unbounded_send(item).is_err() {
            debug!("Detail consumer gone, dropping selection");
        }
    }
}
