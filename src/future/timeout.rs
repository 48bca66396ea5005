use std::error::Error;
use std::fmt;
use std::future::Future;
use std::panic::Location;
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project_lite::pin_project;

/// The error returned when a future did not complete before its deadline.
///
/// Returned by futures created with the [`timeout`] method on [`FutureExt`].
/// Distinguishable from upstream errors and from [`CancellationError`] by
/// type, not by message.
///
/// [`timeout`]: crate::future::FutureExt::timeout
/// [`FutureExt`]: crate::future::FutureExt
/// [`CancellationError`]: crate::future::CancellationError
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutError {
    location: &'static Location<'static>,
}

impl TimeoutError {
    #[track_caller]
    pub(super) fn new() -> Self {
        Self {
            location: Location::caller(),
        }
    }

    /// The source location of the `timeout` call whose deadline expired.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for TimeoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "future timed out (timeout set at {})", self.location)
    }
}

impl Error for TimeoutError {}

pin_project! {
    /// A future that errors after a deadline.
    ///
    /// This `struct` is created by the [`timeout`] method on [`FutureExt`]. See its
    /// documentation for more.
    ///
    /// [`timeout`]: crate::future::FutureExt::timeout
    /// [`FutureExt`]: crate::future::FutureExt
    #[derive(Debug)]
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct Timeout<F, D> {
        #[pin]
        future: F,
        #[pin]
        deadline: D,
        error: TimeoutError,
        completed: bool,
    }
}

impl<F, D> Timeout<F, D> {
    #[track_caller]
    pub(super) fn new(future: F, deadline: D) -> Self {
        Self {
            future,
            deadline,
            error: TimeoutError::new(),
            completed: false,
        }
    }
}

impl<F: Future, D: Future> Future for Timeout<F, D> {
    type Output = Result<F::Output, TimeoutError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        assert!(!*this.completed, "future polled after completing");

        // The wrapped future goes first, so a settlement in the same tick as
        // the deadline still wins the race.
        match this.future.poll(cx) {
            Poll::Ready(v) => {
                *this.completed = true;
                Poll::Ready(Ok(v))
            }
            Poll::Pending => match this.deadline.poll(cx) {
                Poll::Ready(_) => {
                    *this.completed = true;
                    Poll::Ready(Err(*this.error))
                }
                Poll::Pending => Poll::Pending,
            },
        }
    }
}
