//! Temporal quantification.
//!
//! This submodule wraps the types in `std::time` so we can implement traits on
//! them. Each type can be converted to-and-from their respective counterparts.
//! The main reason to do so is the [`IntoFuture`] impl on [`Duration`], which
//! lets a plain duration act as a deadline future.
//!
//! [`IntoFuture`]: std::future::IntoFuture

mod duration;
mod instant;

pub use duration::Duration;
pub use instant::Instant;
