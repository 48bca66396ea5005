use std::future::{Future, IntoFuture};

use super::{CancelHandle, Cancelable, Delay, Timeout};

/// Extend `Future` with control-flow operations.
pub trait FutureExt: Future {
    /// Return an error if a future does not complete within a given time span.
    ///
    /// Typically timeouts are, as the name implies, based on _time_: pass a
    /// [`Duration`] and it becomes the deadline. However this method can time
    /// out based on any future, which is useful in combination with channels,
    /// as it allows (long-lived) futures to be cancelled based on some
    /// external event.
    ///
    /// When the deadline wins the race, the wrapped future is dropped and its
    /// destructors run; its timer, if any, is released with it. Work the
    /// future had delegated elsewhere is not interrupted.
    ///
    /// [`Duration`]: crate::time::Duration
    ///
    /// # Example
    ///
    /// ```
    /// use futures_flow::prelude::*;
    /// use futures_flow::time::Duration;
    ///
    /// fn main() {
    ///     async_io::block_on(async {
    ///         let res = async { "meow" }
    ///             .delay(Duration::from_millis(100))  // longer delay
    ///             .timeout(Duration::from_millis(50)) // shorter timeout
    ///             .await;
    ///         assert!(res.is_err()); // error
    ///
    ///         let res = async { "meow" }
    ///             .delay(Duration::from_millis(50))    // shorter delay
    ///             .timeout(Duration::from_millis(100)) // longer timeout
    ///             .await;
    ///         assert_eq!(res.unwrap(), "meow"); // success
    ///     });
    /// }
    /// ```
    #[track_caller]
    fn timeout<D>(self, deadline: D) -> Timeout<Self, D::IntoFuture>
    where
        Self: Sized,
        D: IntoFuture,
    {
        Timeout::new(self, deadline.into_future())
    }

    /// Delay resolving the future until the given deadline.
    ///
    /// The underlying future will not be polled until the deadline has
    /// expired. In addition to using a time source as a deadline, any future
    /// can be used as a deadline too.
    ///
    /// # Example
    ///
    /// ```
    /// use futures_flow::prelude::*;
    /// use futures_flow::time::{Duration, Instant};
    ///
    /// fn main() {
    ///     async_io::block_on(async {
    ///         let now = Instant::now();
    ///         let delay = Duration::from_millis(100);
    ///         let _ = async { "meow" }.delay(delay).await;
    ///         assert!(now.elapsed() >= *delay);
    ///     });
    /// }
    /// ```
    fn delay<D>(self, deadline: D) -> Delay<Self, D::IntoFuture>
    where
        Self: Sized,
        D: IntoFuture,
    {
        Delay::new(self, deadline.into_future())
    }

    /// Let a handle reject this future from the outside.
    ///
    /// Returns the wrapped future together with a [`CancelHandle`]. Once
    /// [`cancel`] is called the future resolves to `Err(CancellationError)`
    /// at its next poll, whatever the wrapped future would eventually have
    /// produced. If the wrapped future settles first, cancelling afterwards
    /// has no observable effect.
    ///
    /// [`cancel`]: CancelHandle::cancel
    ///
    /// # Example
    ///
    /// ```
    /// use futures_flow::prelude::*;
    /// use futures_flow::time::Duration;
    ///
    /// fn main() {
    ///     async_io::block_on(async {
    ///         let (fut, handle) = futures_flow::task::sleep(Duration::from_secs(60)).cancelable();
    ///         handle.cancel();
    ///         assert!(fut.await.is_err());
    ///     });
    /// }
    /// ```
    #[track_caller]
    fn cancelable(self) -> (Cancelable<Self>, CancelHandle)
    where
        Self: Sized,
    {
        Cancelable::new(self)
    }
}

impl<T> FutureExt for T where T: Future {}
