//! Ordered iteration over sequences of asynchronous operations.
//!
//! Each function here runs one asynchronous operation per item of a
//! sequence. [`map`] drives every operation concurrently and still returns
//! results in input order; [`map_series`] and [`each`] are strictly
//! sequential, never starting item `i + 1` before item `i` has settled. All
//! three stop at the first error, and none of them can interrupt work an
//! operation has delegated elsewhere.

use std::future::Future;

use crate::future::try_join_all;

/// Runs `op(item, index)` for every item with unbounded concurrency,
/// returning results in input order.
///
/// All per-item futures are created up front and driven together; result
/// slots are addressed by input index, so completion order does not affect
/// output order. The first error settles the whole call with that error and
/// the remaining in-flight operations are dropped.
///
/// # Examples
///
/// ```
/// use futures_flow::iter;
/// use futures_flow::task;
/// use futures_flow::time::Duration;
///
/// fn main() {
///     async_io::block_on(async {
///         // The slowest item comes first, yet results stay in input order.
///         let res: Result<Vec<u64>, &str> = iter::map([30u64, 10, 20], |ms, _index| async move {
///             task::sleep(Duration::from_millis(ms)).await;
///             Ok(ms)
///         })
///         .await;
///         assert_eq!(res.unwrap(), [30, 10, 20]);
///     })
/// }
/// ```
pub async fn map<I, F, Fut, T, E>(sequence: I, mut op: F) -> Result<Vec<T>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let futures: Vec<_> = sequence
        .into_iter()
        .enumerate()
        .map(|(index, item)| op(item, index))
        .collect();
    try_join_all(futures).await
}

/// Runs `op(item, index)` for every item strictly sequentially, returning
/// results in input order.
///
/// Item `i + 1`'s operation is not even created until item `i` has settled.
/// The first error short-circuits the call; later items are never invoked.
///
/// # Examples
///
/// ```
/// use futures_flow::iter;
///
/// fn main() {
///     async_io::block_on(async {
///         let res: Result<Vec<usize>, &str> =
///             iter::map_series(["a", "b", "c"], |_item, index| async move { Ok(index) }).await;
///         assert_eq!(res.unwrap(), [0, 1, 2]);
///     })
/// }
/// ```
pub async fn map_series<I, F, Fut, T, E>(sequence: I, mut op: F) -> Result<Vec<T>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let iter = sequence.into_iter();
    let mut results = Vec::with_capacity(iter.size_hint().0);
    for (index, item) in iter.enumerate() {
        results.push(op(item, index).await?);
    }
    Ok(results)
}

/// Runs `op(item, index)` for every item strictly sequentially, discarding
/// results.
///
/// Like [`map_series`] without the output vector: fulfills with `()` once
/// every operation has succeeded, short-circuits on the first error with
/// later items never invoked. Operations that need the full sequence can
/// capture it in the closure.
///
/// # Examples
///
/// ```
/// use futures_flow::iter;
///
/// fn main() {
///     async_io::block_on(async {
///         let mut seen = Vec::new();
///         let res: Result<(), &str> = iter::each([10, 20, 30], |item, _index| {
///             seen.push(item);
///             async { Ok(()) }
///         })
///         .await;
///         assert!(res.is_ok());
///         assert_eq!(seen, [10, 20, 30]);
///     })
/// }
/// ```
pub async fn each<I, F, Fut, E>(sequence: I, mut op: F) -> Result<(), E>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    for (index, item) in sequence.into_iter().enumerate() {
        op(item, index).await?;
    }
    Ok(())
}
