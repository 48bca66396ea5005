use std::fmt;
use std::future::Future;
use std::mem;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Waits for a collection of fallible futures, preserving input order.
///
/// All futures are driven concurrently; the output vector holds each
/// future's success value at the index the future occupied in the input.
/// The first error settles the whole join with that error, and the
/// still-pending siblings are dropped. Work they delegated elsewhere keeps
/// running, with its results discarded.
///
/// # Examples
///
/// ```
/// use futures_flow::future::try_join_all;
///
/// fn main() {
///     async_io::block_on(async {
///         let futures = (1..=3).map(|n| async move { Ok::<u32, &str>(n) });
///         assert_eq!(try_join_all(futures).await, Ok(vec![1, 2, 3]));
///     })
/// }
/// ```
pub fn try_join_all<I, F, T, E>(futures: I) -> TryJoinAll<F, T>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    TryJoinAll {
        slots: futures
            .into_iter()
            .map(|future| Slot::Running(Box::pin(future)))
            .collect(),
        completed: false,
    }
}

enum Slot<F, T> {
    Running(Pin<Box<F>>),
    Done(T),
}

/// A future for the [`try_join_all`] function. See its documentation for
/// more.
#[must_use = "futures do nothing unless polled or .awaited"]
pub struct TryJoinAll<F, T> {
    slots: Vec<Slot<F, T>>,
    completed: bool,
}

// The inner futures are boxed and a completed value is only ever moved out
// by value, so `TryJoinAll` itself never needs to be pinned.
impl<F, T> Unpin for TryJoinAll<F, T> {}

impl<F, T> fmt::Debug for TryJoinAll<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryJoinAll")
            .field("len", &self.slots.len())
            .finish_non_exhaustive()
    }
}

impl<F, T, E> Future for TryJoinAll<F, T>
where
    F: Future<Output = Result<T, E>>,
{
    type Output = Result<Vec<T>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        assert!(!this.completed, "future polled after completing");

        let mut remaining = 0;
        for slot in this.slots.iter_mut() {
            if let Slot::Running(future) = slot {
                match future.as_mut().poll(cx) {
                    Poll::Ready(Ok(value)) => *slot = Slot::Done(value),
                    Poll::Ready(Err(error)) => {
                        this.completed = true;
                        return Poll::Ready(Err(error));
                    }
                    Poll::Pending => remaining += 1,
                }
            }
        }

        if remaining > 0 {
            return Poll::Pending;
        }

        this.completed = true;
        let results = mem::take(&mut this.slots)
            .into_iter()
            .map(|slot| match slot {
                Slot::Done(value) => value,
                Slot::Running(_) => unreachable!("every slot has resolved"),
            })
            .collect();
        Poll::Ready(Ok(results))
    }
}
