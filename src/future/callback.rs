//! Adapters from error-first callback APIs to futures.

use std::fmt;

use super::{deferred, Deferred, Resolver};

/// The single-shot completion callback handed to [`from_callback`] and
/// [`promisify`] registrations.
///
/// Consuming it with [`call`] settles the adapted future: `Ok` fulfills,
/// `Err` rejects. Carrying success and failure in a `Result` sidesteps the
/// classic error-first ambiguity where a falsy success value (`0`, `""`,
/// `false`) is indistinguishable from "no value at all": here `Ok(0)` is a
/// perfectly ordinary fulfillment.
///
/// [`call`]: Callback::call
pub struct Callback<T, E> {
    resolver: Resolver<T, E>,
}

impl<T, E> Callback<T, E> {
    /// Settle the adapted future with `result`.
    ///
    /// Only the first settlement is honored; if the registration function
    /// later errors as well, that error is discarded.
    pub fn call(self, result: Result<T, E>) {
        match result {
            Ok(value) => self.resolver.resolve(value),
            Err(error) => self.resolver.reject(error),
        }
    }
}

impl<T, E> fmt::Debug for Callback<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").finish_non_exhaustive()
    }
}

/// Adapts a single-shot error-first callback API into a future.
///
/// `register` is invoked synchronously with a [`Callback`] to hand to the
/// underlying operation. If `register` itself fails, the returned future
/// rejects with that error instead of it surfacing at the call site, unless
/// the callback already settled the future, in which case the earlier
/// settlement wins.
///
/// # Examples
///
/// ```
/// use futures_flow::future::from_callback;
///
/// fn main() {
///     async_io::block_on(async {
///         let fut = from_callback::<u32, &str, _>(|cb| {
///             cb.call(Ok(42));
///             Ok(())
///         });
///         assert_eq!(fut.await, Ok(42));
///     })
/// }
/// ```
pub fn from_callback<T, E, F>(register: F) -> Deferred<T, E>
where
    F: FnOnce(Callback<T, E>) -> Result<(), E>,
{
    let (future, resolver) = deferred();
    let callback = Callback {
        resolver: resolver.clone(),
    };
    if let Err(error) = register(callback) {
        resolver.reject(error);
    }
    future
}

/// Turns a callback-style function into a future-returning one.
///
/// `f` takes its ordinary argument plus a completion [`Callback`]; the
/// wrapper takes just the argument and returns a future. Functions with more
/// than one argument wrap by taking a tuple, and anything the wrapped
/// function would have read from a bound receiver is closure capture. Errors
/// returned by `f` directly become rejections, same as [`from_callback`].
///
/// # Examples
///
/// ```
/// use futures_flow::future::{promisify, Callback};
///
/// fn double(x: u32, cb: Callback<u32, &'static str>) -> Result<(), &'static str> {
///     cb.call(Ok(x * 2));
///     Ok(())
/// }
///
/// fn main() {
///     async_io::block_on(async {
///         let double = promisify(double);
///         assert_eq!(double(21).await, Ok(42));
///     })
/// }
/// ```
pub fn promisify<A, T, E, F>(f: F) -> impl Fn(A) -> Deferred<T, E>
where
    F: Fn(A, Callback<T, E>) -> Result<(), E>,
{
    move |arg| from_callback(|callback| f(arg, callback))
}

/// Builds a future from an executor function.
///
/// `executor` is invoked synchronously with a [`Resolver`] for the returned
/// future. An `Err` return rejects the future rather than surfacing at the
/// call site; as everywhere else, the first settlement wins.
///
/// # Examples
///
/// ```
/// use futures_flow::future::promise;
///
/// fn main() {
///     async_io::block_on(async {
///         let fut = promise::<&str, u32, _>(|resolver| {
///             resolver.resolve("meow");
///             Ok(())
///         });
///         assert_eq!(fut.await, Ok("meow"));
///     })
/// }
/// ```
pub fn promise<T, E, F>(executor: F) -> Deferred<T, E>
where
    F: FnOnce(Resolver<T, E>) -> Result<(), E>,
{
    let (future, resolver) = deferred();
    if let Err(error) = executor(resolver.clone()) {
        resolver.reject(error);
    }
    future
}
