//! Switch-to-latest: flatten a stream of futures, keeping only the newest.

use futures::Stream;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Stream returned by [`PipelineStreamExt::switch_to_latest`](super::PipelineStreamExt::switch_to_latest).
///
/// Every future pulled from upstream replaces the one in flight. The replaced
/// future is dropped before it resolves, so its output is never emitted even
/// if it would have finished first. Dropping it also cancels whatever it was
/// waiting on (an HTTP request, for instance).
///
/// Each future is polled as soon as it is pulled, so every upstream value
/// starts its work even when several arrive between two polls. Of a burst,
/// only the last one may emit.
#[must_use = "streams do nothing unless polled"]
pub struct SwitchToLatest<S>
where
    S: Stream,
    S::Item: Future,
{
    upstream: Option<Pin<Box<S>>>,
    inner: Option<Pin<Box<S::Item>>>,
    /// Output of the newest future when it resolved on its first poll
    ready: Option<<S::Item as Future>::Output>,
}

// The cached output is never pinned; upstream and inner are boxed.
impl<S> Unpin for SwitchToLatest<S>
where
    S: Stream,
    S::Item: Future,
{
}

impl<S> SwitchToLatest<S>
where
    S: Stream,
    S::Item: Future,
{
    pub(crate) fn new(upstream: S) -> Self {
        Self {
            upstream: Some(Box::pin(upstream)),
            inner: None,
            ready: None,
        }
    }

    /// Make `next` the newest future and give it its first poll.
    fn start(&mut self, next: S::Item, cx: &mut Context<'_>) {
        let mut future = Box::pin(next);
        match future.as_mut().poll(cx) {
            Poll::Ready(output) => {
                self.inner = None;
                self.ready = Some(output);
            }
            Poll::Pending => {
                self.inner = Some(future);
                self.ready = None;
            }
        }
    }
}

impl<S> Stream for SwitchToLatest<S>
where
    S: Stream,
    S::Item: Future,
{
    type Item = <S::Item as Future>::Output;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        while let Some(upstream) = this.upstream.as_mut() {
            match upstream.as_mut().poll_next(cx) {
                Poll::Ready(Some(next)) => this.start(next, cx),
                Poll::Ready(None) => this.upstream = None,
                Poll::Pending => break,
            }
        }

        if let Some(output) = this.ready.take() {
            return Poll::Ready(Some(output));
        }

        if let Some(inner) = this.inner.as_mut() {
            if let Poll::Ready(output) = inner.as_mut().poll(cx) {
                this.inner = None;
                return Poll::Ready(Some(output));
            }
        }

        if this.upstream.is_none() && this.inner.is_none() {
            Poll::Ready(None)
        } else {
            Poll::Pending
        }
    }
}
