//! # Async control-flow combinators.
//!
//! This crate provides a small set of composable operations over plain
//! futures: timed sleeping, delayed execution, timeout racing, observer-side
//! cancellation, error-first callback adaptation, externally-resolved
//! ("deferred") futures, and ordered iteration over sequences of asynchronous
//! operations. It does not bring its own runtime; timers are backed by
//! [`async-io`] and every combinator works under any executor.
//!
//! # Examples
//!
//! __Error if a future takes longer than 200ms__
//!
//! ```
//! use futures_flow::prelude::*;
//! use futures_flow::time::Duration;
//!
//! fn main() {
//!     async_io::block_on(async {
//!         let res = async { "meow" }
//!             .delay(Duration::from_millis(100))
//!             .timeout(Duration::from_millis(200))
//!             .await;
//!         assert_eq!(res.unwrap(), "meow");
//!     })
//! }
//! ```
//!
//! __Stop waiting for a future from the outside__
//!
//! ```
//! use futures_flow::prelude::*;
//! use futures_flow::time::Duration;
//!
//! fn main() {
//!     async_io::block_on(async {
//!         let (fut, handle) = futures_flow::task::sleep(Duration::from_secs(60)).cancelable();
//!         handle.cancel();
//!         assert!(fut.await.is_err());
//!     })
//! }
//! ```
//!
//! __Run one asynchronous operation per item, results in input order__
//!
//! ```
//! use futures_flow::iter;
//! use futures_flow::task;
//! use futures_flow::time::Duration;
//!
//! fn main() {
//!     async_io::block_on(async {
//!         let doubled: Result<Vec<u32>, &str> = iter::map([1, 2, 3], |n, _index| async move {
//!             task::sleep(Duration::from_millis(10)).await;
//!             Ok(n * 2)
//!         })
//!         .await;
//!         assert_eq!(doubled.unwrap(), [2, 4, 6]);
//!     })
//! }
//! ```
//!
//! # Cancellation model
//!
//! Cancellation and timeouts in this crate express *disinterest*, not
//! interruption. When a [`Timeout`] fires or a [`CancelHandle`] is used, the
//! caller stops observing the wrapped future and it is dropped; work the
//! future had delegated elsewhere (a spawned task, an OS-level operation)
//! keeps running to completion and its outcome is discarded. Nothing in this
//! crate can reach out and stop in-flight work.
//!
//! # Futures
//!
//! - [`Future::timeout`](`future::FutureExt::timeout`) Error if the future does not complete before a deadline.
//! - [`Future::delay`](`future::FutureExt::delay`) Hold off polling the future until a deadline.
//! - [`Future::cancelable`](`future::FutureExt::cancelable`) Stop waiting for the future when a handle says so.
//! - [`future::try_join_all`] Wait for a collection of fallible futures, preserving order.
//! - [`future::deferred`] A future settled from the outside through a [`Resolver`](`future::Resolver`).
//! - [`future::from_callback`] Adapt a single-shot error-first callback API into a future.
//! - [`future::promisify`] Turn a callback-style function into a future-returning one.
//! - [`future::promise`] Build a future from an executor function.
//!
//! # Tasks
//!
//! - [`task::sleep`] Sleeps for the specified amount of time.
//!
//! # Sequences
//!
//! - [`iter::map`] One asynchronous operation per item, unbounded concurrency, ordered results.
//! - [`iter::map_series`] One asynchronous operation per item, strictly sequential.
//! - [`iter::each`] Sequential per-item operations, results discarded.
//!
//! [`async-io`]: https://docs.rs/async-io
//! [`Timeout`]: crate::future::Timeout
//! [`CancelHandle`]: crate::future::CancelHandle

#![forbid(unsafe_code)]
#![deny(missing_debug_implementations)]
#![warn(missing_docs, future_incompatible, unreachable_pub)]

pub mod future;
pub mod iter;
pub mod task;
pub mod time;

/// The `futures-flow` prelude.
pub mod prelude {
    pub use super::future::FutureExt as _;
}
