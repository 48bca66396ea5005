//! Freestanding asynchronous operations.

mod sleep;

pub use sleep::{sleep, Sleep};
