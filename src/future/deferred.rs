use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_channel::{bounded, Receiver, Sender};
use futures_core::Stream;
use pin_project_lite::pin_project;

/// Creates a future whose outcome is supplied from the outside.
///
/// Returns the future together with a [`Resolver`] that settles it. The
/// resolver can be cloned and carried anywhere; only the first call to
/// [`resolve`] or [`reject`] across all clones is honored. If every resolver
/// is dropped without settling, the future stays pending forever, like a
/// promise whose executor never runs.
///
/// [`resolve`]: Resolver::resolve
/// [`reject`]: Resolver::reject
///
/// # Examples
///
/// ```
/// use futures_flow::future::deferred;
///
/// fn main() {
///     async_io::block_on(async {
///         let (fut, resolver) = deferred::<u32, &str>();
///         resolver.resolve(42);
///         assert_eq!(fut.await, Ok(42));
///     })
/// }
/// ```
pub fn deferred<T, E>() -> (Deferred<T, E>, Resolver<T, E>) {
    // Capacity one makes "first settlement wins" structural: a second send
    // either finds the channel full or lands after the receiver has stopped
    // listening, and is discarded either way.
    let (sender, receiver) = bounded(1);
    (
        Deferred {
            outcome: receiver,
            completed: false,
        },
        Resolver { outcome: sender },
    )
}

pin_project! {
    /// A future settled from the outside through a [`Resolver`].
    ///
    /// This `struct` is created by the [`deferred`] function. See its
    /// documentation for more.
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct Deferred<T, E> {
        #[pin]
        outcome: Receiver<Result<T, E>>,
        completed: bool,
    }
}

impl<T, E> fmt::Debug for Deferred<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred").finish_non_exhaustive()
    }
}

impl<T, E> Future for Deferred<T, E> {
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        assert!(!*this.completed, "future polled after completing");

        match this.outcome.poll_next(cx) {
            Poll::Ready(Some(result)) => {
                *this.completed = true;
                Poll::Ready(result)
            }
            // Every resolver dropped without settling: nothing is left that
            // could complete this future.
            Poll::Ready(None) | Poll::Pending => Poll::Pending,
        }
    }
}

/// Settles a [`Deferred`] future.
///
/// This `struct` is created by the [`deferred`] function. See its
/// documentation for more.
pub struct Resolver<T, E> {
    outcome: Sender<Result<T, E>>,
}

impl<T, E> Resolver<T, E> {
    /// Fulfill the paired [`Deferred`] with `value`.
    ///
    /// A no-op if the future has already been settled.
    pub fn resolve(self, value: T) {
        let _ = self.outcome.try_send(Ok(value));
    }

    /// Reject the paired [`Deferred`] with `error`.
    ///
    /// A no-op if the future has already been settled.
    pub fn reject(self, error: E) {
        let _ = self.outcome.try_send(Err(error));
    }
}

impl<T, E> Clone for Resolver<T, E> {
    fn clone(&self) -> Self {
        Self {
            outcome: self.outcome.clone(),
        }
    }
}

impl<T, E> fmt::Debug for Resolver<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver").finish_non_exhaustive()
    }
}
