//! Scripted GIF API for pipeline tests.
//!
//! Each query can be answered immediately or held until the test releases
//! it, which lets tests decide the order in which in-flight requests resolve.

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::{GifDetail, SearchResult};
use crate::traits::GifApi;

/// A provider call that started (its future was polled).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Search(String),
    Featured,
    GifInfo(String),
}

/// Releases a held response.
///
/// Dropping the gate without releasing resolves the held call with `[]`.
#[derive(Debug)]
pub struct Gate<T> {
    tx: oneshot::Sender<Vec<T>>,
}

impl<T> Gate<T> {
    /// Resolve the held call with `items`. Returns `false` if nothing is
    /// waiting on it anymore.
    pub fn release(self, items: Vec<T>) -> bool {
        self.tx.send(items).is_ok()
    }
}

#[derive(Clone)]
enum Scripted<T: Clone> {
    Ready(Vec<T>),
    Held(Shared<BoxFuture<'static, Vec<T>>>),
}

impl<T> Scripted<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn held() -> (Self, Gate<T>) {
        let (tx, rx) = oneshot::channel();
        let future = rx.map(|result| result.unwrap_or_default()).boxed().shared();
        (Scripted::Held(future), Gate { tx })
    }

    async fn resolve(scripted: Option<Self>) -> Vec<T> {
        match scripted {
            None => Vec::new(),
            Some(Scripted::Ready(items)) => items,
            Some(Scripted::Held(future)) => future.await,
        }
    }
}

#[derive(Default)]
struct MockState {
    searches: HashMap<String, Scripted<SearchResult>>,
    featured: Option<Scripted<SearchResult>>,
    details: HashMap<String, Scripted<GifDetail>>,
    calls: Vec<ApiCall>,
}

/// Scripted [`GifApi`].
///
/// Unscripted queries answer `[]`, matching what the real client returns on
/// failure.
///
/// # Example
///
/// ```ignore
/// use gifgrid::adapters::mock::MockGifApi;
///
/// let api = MockGifApi::new();
/// let slow = api.hold_search("a");
/// api.respond_search("ab", vec![result("2")]);
/// // ... drive the pipeline ...
/// slow.release(vec![result("1")]);
/// ```
#[derive(Clone, Default)]
pub struct MockGifApi {
    state: Arc<Mutex<MockState>>,
}

impl MockGifApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_search(&self, query: &str, results: Vec<SearchResult>) {
        let mut state = self.state.lock().unwrap();
        state
            .searches
            .insert(query.to_string(), Scripted::Ready(results));
    }

    /// Hold the response for `query` until the returned gate is released.
    pub fn hold_search(&self, query: &str) -> Gate<SearchResult> {
        let (scripted, gate) = Scripted::held();
        let mut state = self.state.lock().unwrap();
        state.searches.insert(query.to_string(), scripted);
        gate
    }

    pub fn respond_featured(&self, results: Vec<SearchResult>) {
        self.state.lock().unwrap().featured = Some(Scripted::Ready(results));
    }

    pub fn hold_featured(&self) -> Gate<SearchResult> {
        let (scripted, gate) = Scripted::held();
        self.state.lock().unwrap().featured = Some(scripted);
        gate
    }

    pub fn respond_gif_info(&self, id: &str, details: Vec<GifDetail>) {
        let mut state = self.state.lock().unwrap();
        state.details.insert(id.to_string(), Scripted::Ready(details));
    }

    pub fn hold_gif_info(&self, id: &str) -> Gate<GifDetail> {
        let (scripted, gate) = Scripted::held();
        let mut state = self.state.lock().unwrap();
        state.details.insert(id.to_string(), scripted);
        gate
    }

    /// Calls that started, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.lock().unwrap().calls.clone()
    }
}

#[async_trait]
impl GifApi for MockGifApi {
    async fn search_gifs(&self, query: &str) -> Vec<SearchResult> {
        let scripted = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(ApiCall::Search(query.to_string()));
            state.searches.get(query).cloned()
        };
        Scripted::resolve(scripted).await
    }

    async fn featured_gifs(&self) -> Vec<SearchResult> {
        let scripted = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(ApiCall::Featured);
            state.featured.clone()
        };
        Scripted::resolve(scripted).await
    }

    async fn gif_info(&self, id: &str) -> Vec<GifDetail> {
        let scripted = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(ApiCall::GifInfo(id.to_string()));
            state.details.get(id).cloned()
        };
        Scripted::resolve(scripted).await
    }
}
