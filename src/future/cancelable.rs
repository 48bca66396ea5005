use std::error::Error;
use std::fmt;
use std::future::Future;
use std::panic::Location;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_channel::{bounded, Receiver, Sender};
use futures_core::Stream;
use pin_project_lite::pin_project;

/// The error returned when a future was canceled through a [`CancelHandle`].
///
/// Distinguishable from upstream errors and from [`TimeoutError`] by type,
/// not by message.
///
/// [`TimeoutError`]: crate::future::TimeoutError
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancellationError {
    location: &'static Location<'static>,
}

impl CancellationError {
    #[track_caller]
    pub(super) fn new() -> Self {
        Self {
            location: Location::caller(),
        }
    }

    /// The source location of the `cancelable` call whose handle was used.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for CancellationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "future canceled (cancelable set at {})", self.location)
    }
}

impl Error for CancellationError {}

/// Requests cancellation of the paired [`Cancelable`] future.
///
/// This `struct` is created by the [`cancelable`] method on [`FutureExt`]. See
/// its documentation for more.
///
/// [`cancelable`]: crate::future::FutureExt::cancelable
/// [`FutureExt`]: crate::future::FutureExt
#[derive(Debug)]
pub struct CancelHandle {
    signal: Sender<()>,
}

impl CancelHandle {
    /// Stop waiting for the paired future.
    ///
    /// The next time the [`Cancelable`] is polled it resolves to
    /// `Err(CancellationError)` instead of polling the future it wraps.
    /// Calling this more than once, or after the paired future has already
    /// settled, has no observable effect.
    pub fn cancel(&self) {
        let _ = self.signal.try_send(());
    }
}

pin_project! {
    /// A future that can be rejected from the outside.
    ///
    /// This `struct` is created by the [`cancelable`] method on [`FutureExt`]. See its
    /// documentation for more.
    ///
    /// [`cancelable`]: crate::future::FutureExt::cancelable
    /// [`FutureExt`]: crate::future::FutureExt
    #[derive(Debug)]
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct Cancelable<F> {
        #[pin]
        future: F,
        #[pin]
        signal: Receiver<()>,
        error: CancellationError,
        completed: bool,
    }
}

impl<F> Cancelable<F> {
    #[track_caller]
    pub(super) fn new(future: F) -> (Self, CancelHandle) {
        let (sender, receiver) = bounded(1);
        let cancelable = Self {
            future,
            signal: receiver,
            error: CancellationError::new(),
            completed: false,
        };
        (cancelable, CancelHandle { signal: sender })
    }
}

impl<F: Future> Future for Cancelable<F> {
    type Output = Result<F::Output, CancellationError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        assert!(!*this.completed, "future polled after completing");

        // The signal goes first: a cancel issued while we were pending beats
        // the wrapped future, even one that is ready on its very first poll.
        match this.signal.poll_next(cx) {
            Poll::Ready(Some(())) => {
                *this.completed = true;
                return Poll::Ready(Err(*this.error));
            }
            // The handle was dropped without cancelling; from here on only
            // the wrapped future can settle us.
            Poll::Ready(None) | Poll::Pending => {}
        }

        match this.future.poll(cx) {
            Poll::Ready(v) => {
                *this.completed = true;
                Poll::Ready(Ok(v))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
