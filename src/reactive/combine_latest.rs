//! Combine-latest: pair the most recent values of two streams.

use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Stream returned by [`combine_latest`].
///
/// Holds the last value seen on each side. Once both sides have produced a
/// value, every new value on either side emits the current pair. Ends when
/// both sides have ended.
#[must_use = "streams do nothing unless polled"]
pub struct CombineLatest<A, B>
where
    A: Stream,
    B: Stream,
{
    left: Option<Pin<Box<A>>>,
    right: Option<Pin<Box<B>>>,
    latest_left: Option<A::Item>,
    latest_right: Option<B::Item>,
    right_first: bool,
}

// The cached values are never pinned; both sides are boxed.
impl<A, B> Unpin for CombineLatest<A, B>
where
    A: Stream,
    B: Stream,
{
}

/// Combine two streams into a stream of `(latest_left, latest_right)` pairs.
pub fn combine_latest<A, B>(left: A, right: B) -> CombineLatest<A, B>
where
    A: Stream,
    B: Stream,
    A::Item: Clone,
    B::Item: Clone,
{
    CombineLatest {
        left: Some(Box::pin(left)),
        right: Some(Box::pin(right)),
        latest_left: None,
        latest_right: None,
        right_first: false,
    }
}

impl<A, B> CombineLatest<A, B>
where
    A: Stream,
    B: Stream,
    A::Item: Clone,
    B::Item: Clone,
{
    fn poll_left(&mut self, cx: &mut Context<'_>) -> bool {
        let Some(left) = self.left.as_mut() else {
            return false;
        };
        match left.as_mut().poll_next(cx) {
            Poll::Ready(Some(value)) => {
                self.latest_left = Some(value);
                true
            }
            Poll::Ready(None) => {
                self.left = None;
                false
            }
            Poll::Pending => false,
        }
    }

    fn poll_right(&mut self, cx: &mut Context<'_>) -> bool {
        let Some(right) = self.right.as_mut() else {
            return false;
        };
        match right.as_mut().poll_next(cx) {
            Poll::Ready(Some(value)) => {
                self.latest_right = Some(value);
                true
            }
            Poll::Ready(None) => {
                self.right = None;
                false
            }
            Poll::Pending => false,
        }
    }

    fn current(&self) -> Option<(A::Item, B::Item)> {
        match (&self.latest_left, &self.latest_right) {
            (Some(left), Some(right)) => Some((left.clone(), right.clone())),
            _ => None,
        }
    }
}

impl<A, B> Stream for CombineLatest<A, B>
where
    A: Stream,
    B: Stream,
    A::Item: Clone,
    B::Item: Clone,
{
    type Item = (A::Item, B::Item);

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        loop {
            // Alternate which side goes first so a busy side cannot starve the other.
            this.right_first = !this.right_first;
            let changed = if this.right_first {
                this.poll_right(cx) || this.poll_left(cx)
            } else {
                this.poll_left(cx) || this.poll_right(cx)
            };

            if changed {
                match this.current() {
                    Some(pair) => return Poll::Ready(Some(pair)),
                    // Only one side has a value so far; keep pulling.
                    None => continue,
                }
            }

            if this.left.is_none() && this.right.is_none() {
                return Poll::Ready(None);
            }
            return Poll::Pending;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;
    use futures::{FutureExt, StreamExt};

    #[tokio::test]
    async fn test_waits_for_both_sides() {
        let (left_tx, left_rx) = mpsc::unbounded::<u8>();
        let (right_tx, right_rx) = mpsc::unbounded::<char>();
        let mut out = combine_latest(left_rx, right_rx);

        left_tx.unbounded_send(1).unwrap();
        assert!(out.next().now_or_never().is_none());

        right_tx.unbounded_send('a').unwrap();
        assert_eq!(out.next().await, Some((1, 'a')));
    }

    #[tokio::test]
    async fn test_emits_on_every_update() {
        let (left_tx, left_rx) = mpsc::unbounded::<u8>();
        let (right_tx, right_rx) = mpsc::unbounded::<char>();
        let mut out = combine_latest(left_rx, right_rx);

        left_tx.unbounded_send(1).unwrap();
        right_tx.unbounded_send('a').unwrap();
        out.next().await;

        left_tx.unbounded_send(2).unwrap();
        assert_eq!(out.next().await, Some((2, 'a')));

        right_tx.unbounded_send('b').unwrap();
        assert_eq!(out.next().await, Some((2, 'b')));
    }

    #[tokio::test]
    async fn test_keeps_last_value_of_finished_side() {
        let left = futures::stream::iter(vec![1u8]);
        let (right_tx, right_rx) = mpsc::unbounded::<char>();
        let mut out = combine_latest(left, right_rx);

        right_tx.unbounded_send('a').unwrap();
        assert_eq!(out.next().await, Some((1, 'a')));

        right_tx.unbounded_send('b').unwrap();
        assert_eq!(out.next().await, Some((1, 'b')));

        drop(right_tx);
        assert_eq!(out.next().await, None);
    }

    #[tokio::test]
    async fn test_ends_when_both_sides_end() {
        let out: Vec<(u8, u8)> = combine_latest(
            futures::stream::iter(vec![1u8]),
            futures::stream::iter(vec![9u8]),
        )
        .collect()
        .await;

        assert_eq!(out, vec![(1, 9)]);
    }

    #[tokio::test]
    async fn test_items_need_not_be_unpin() {
        use std::marker::PhantomPinned;

        fn assert_unpin<T: Unpin>(_: &T) {}

        let mut out = combine_latest(
            futures::stream::iter(vec![PhantomPinned]),
            futures::stream::iter(vec![7u8]),
        );
        assert_unpin(&out);

        let (_, right) = out.next().await.unwrap();
        assert_eq!(right, 7);
    }
}
