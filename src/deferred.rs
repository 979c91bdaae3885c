//! Deferred delivery of an already computed result.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::FusedFuture;

/// A future holding a value that was computed when the operation was
/// requested, but which is handed out only on a later poll.
///
/// The first poll always returns `Poll::Pending` (after waking the task), so
/// the value is never observed within the call that produced the future. The
/// second poll yields the value, exactly once.
///
/// The future owns its value: changes made to the file system after the
/// operation was requested do not affect what the future resolves to.
#[derive(Debug)]
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Deferred<T> {
    value: Option<T>,
    yielded: bool,
}

impl<T> Deferred<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Some(value),
            yielded: false,
        }
    }
}

// `value` is never pinned.
impl<T> Unpin for Deferred<T> {}

impl<T> Future for Deferred<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        let this = self.get_mut();
        if !this.yielded {
            this.yielded = true;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }
        Poll::Ready(
            this.value
                .take()
                .expect("Deferred polled after completion"),
        )
    }
}

impl<T> FusedFuture for Deferred<T> {
    fn is_terminated(&self) -> bool {
        self.value.is_none()
    }
}
