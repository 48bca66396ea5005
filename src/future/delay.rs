use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::ready;
use pin_project_lite::pin_project;

pin_project! {
    /// A future held back until a deadline has passed.
    ///
    /// The wrapped future is left untouched while the deadline is pending;
    /// its first poll happens after the deadline resolves, so side effects
    /// of its body start late as well.
    ///
    /// This `struct` is created by the [`delay`] method on [`FutureExt`]. See its
    /// documentation for more.
    ///
    /// [`delay`]: crate::future::FutureExt::delay
    /// [`FutureExt`]: crate::future::FutureExt
    #[derive(Debug)]
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct Delay<F, D> {
        #[pin]
        future: F,
        #[pin]
        deadline: D,
        elapsed: bool,
        completed: bool,
    }
}

impl<F, D> Delay<F, D> {
    pub(super) fn new(future: F, deadline: D) -> Self {
        Self {
            future,
            deadline,
            elapsed: false,
            completed: false,
        }
    }
}

impl<F: Future, D: Future> Future for Delay<F, D> {
    type Output = F::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        assert!(!*this.completed, "future polled after completing");

        if !*this.elapsed {
            ready!(this.deadline.poll(cx));
            *this.elapsed = true;
        }

        // The deadline has passed; from here on this is a transparent
        // wrapper around the future.
        match this.future.poll(cx) {
            Poll::Ready(value) => {
                *this.completed = true;
                Poll::Ready(value)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
