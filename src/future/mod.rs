//! Asynchronous values.
//!
//! # Cancellation
//!
//! Futures can be cancelled by dropping them before they finish executing.
//! This is useful when we're no longer interested in the result of an
//! operation, as it allows us to stop doing needless work.
//!
//! To stop waiting for a future from somewhere else, wrap it with
//! [`FutureExt::cancelable`]. The returned [`CancelHandle`] rejects the
//! wrapped future with a [`CancellationError`] the next time it is polled.
//! Note that neither mechanism interrupts work the future has delegated
//! elsewhere; it only stops the caller from waiting on it.
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

mod callback;
mod cancelable;
mod deferred;
mod delay;
mod future_ext;
mod join_all;
mod timeout;

pub use callback::{from_callback, promise, promisify, Callback};
pub use cancelable::{CancelHandle, Cancelable, CancellationError};
pub use deferred::{deferred, Deferred, Resolver};
pub use delay::Delay;
pub use future_ext::FutureExt;
pub use join_all::{try_join_all, TryJoinAll};
pub use std::future::IntoFuture;
pub use timeout::{Timeout, TimeoutError};
