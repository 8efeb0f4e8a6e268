//! Cell taps to navigation commands.

use futures::stream::BoxStream;
use futures::{Stream, StreamExt};

use crate::models::SearchResult;

/// What the presentation layer should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationCommand {
    /// Push the detail view for this result.
    ShowDetail(SearchResult),
}

impl NavigationCommand {
    pub fn result(&self) -> &SearchResult {
        match self {
            NavigationCommand::ShowDetail(result) => result,
        }
    }
}

/// Maps every tapped result to [`NavigationCommand::ShowDetail`], one for one.
pub struct SelectionRouter;

impl SelectionRouter {
    pub fn route<S>(taps: S) -> BoxStream<'static, NavigationCommand>
    where
        S: Stream<Item = SearchResult> + Send + 'static,
    {
        taps.map(NavigationCommand::ShowDetail).boxed()
    }
}
