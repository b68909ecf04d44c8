//! Synchronous-to-asynchronous sequence adapter.

use crate::runtime::YieldPoint;
use futures::Stream;
use log::trace;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Stream over the items of a synchronous iterator.
///
/// Every pull suspends once before forwarding the iterator's next item, so
/// long sequences interleave with other tasks on the same scheduler. Items
/// are passed through untouched: an iterator of `Result<T, E>` surfaces each
/// `Err` at the pull that produced it.
///
/// Created by [`aiter`]. Single-use; not restartable.
#[derive(Debug)]
#[must_use = "streams do nothing unless polled"]
pub struct AsyncIter<I> {
    iter: I,
    yield_point: YieldPoint,
    done: bool,
}

// The iterator is never pinned, only borrowed mutably between polls.
impl<I> Unpin for AsyncIter<I> {}

impl<I: Iterator> AsyncIter<I> {
    fn new(iter: I) -> Self {
        Self {
            iter,
            yield_point: YieldPoint::default(),
            done: false,
        }
    }

    /// Consume the adapter, returning the underlying iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

/// Adapt any synchronous iterable into a cooperative [`Stream`].
///
/// ```rust
/// use futures::StreamExt;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let chars: Vec<char> = ripix::aiter("abc".chars()).collect().await;
/// assert_eq!(chars, ['a', 'b', 'c']);
/// # }
/// ```
pub fn aiter<T>(iterable: T) -> AsyncIter<T::IntoIter>
where
    T: IntoIterator,
{
    trace!("aiter: adapting synchronous iterator");
    AsyncIter::new(iterable.into_iter())
}

impl<I: Iterator> Stream for AsyncIter<I> {
    type Item = I::Item;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.done {
            return Poll::Ready(None);
        }
        futures::ready!(self.yield_point.poll_yield(cx));

        match self.iter.next() {
            Some(item) => Poll::Ready(Some(item)),
            None => {
                trace!("aiter: underlying iterator exhausted");
                self.done = true;
                Poll::Ready(None)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            self.iter.size_hint()
        }
    }
}

impl<I: Iterator> futures::stream::FusedStream for AsyncIter<I> {
    fn is_terminated(&self) -> bool {
        self.done
    }
}
