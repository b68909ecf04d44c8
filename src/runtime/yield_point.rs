//! Cooperative suspension used by the hand-written streams.

use std::task::{Context, Poll};

/// Suspends a stream once per pull.
///
/// The first poll wakes the task and returns `Pending`, handing control back
/// to the scheduler. The next poll returns `Ready` and re-arms the point.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct YieldPoint {
    yielded: bool,
}

impl YieldPoint {
    #[inline]
    pub(crate) fn poll_yield(&mut self, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            self.yielded = false;
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}
