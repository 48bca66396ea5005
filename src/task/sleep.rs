use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_io::Timer;
use pin_project_lite::pin_project;

use crate::time::{Duration, Instant};

/// Sleeps for the specified amount of time.
///
/// The returned future resolves with the instant at which the timer fired,
/// never errors, and registers exactly one timer with the reactor. Dropping
/// the future before it completes deregisters the timer.
///
/// # Examples
///
/// ```
/// use futures_flow::task::sleep;
/// use futures_flow::time::{Duration, Instant};
///
/// fn main() {
///     async_io::block_on(async {
///         let now = Instant::now();
///         sleep(Duration::from_millis(100)).await;
///         assert!(now.elapsed() >= *Duration::from_millis(100));
///     })
/// }
/// ```
pub fn sleep(dur: Duration) -> Sleep {
    Sleep {
        timer: Timer::after(dur.into()),
        completed: false,
    }
}

pin_project! {
    /// Sleeps for the specified amount of time.
    ///
    /// This `struct` is created by the [`sleep`] function. See its
    /// documentation for more.
    #[derive(Debug)]
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct Sleep {
        #[pin]
        timer: Timer,
        completed: bool,
    }
}

impl Future for Sleep {
    type Output = Instant;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        assert!(!self.completed, "future polled after completing");
        let this = self.project();
        match this.timer.poll(cx) {
            Poll::Ready(instant) => {
                *this.completed = true;
                Poll::Ready(instant.into())
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
