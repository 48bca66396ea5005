use futures_flow::future::{deferred, from_callback, promise, promisify, Callback};
use futures_flow::task::sleep;
use futures_flow::time::Duration;

#[test]
fn callback_success_fulfills() {
    async_io::block_on(async {
        let fut = from_callback::<u32, &str, _>(|cb| {
            cb.call(Ok(42));
            Ok(())
        });
        assert_eq!(fut.await, Ok(42));
    })
}

#[test]
fn callback_error_rejects() {
    async_io::block_on(async {
        let fut = from_callback::<u32, &str, _>(|cb| {
            cb.call(Err("boom"));
            Ok(())
        });
        assert_eq!(fut.await, Err("boom"));
    })
}

#[test]
fn zero_is_an_ordinary_success_value() {
    async_io::block_on(async {
        let fut = from_callback::<u32, &str, _>(|cb| {
            cb.call(Ok(0));
            Ok(())
        });
        assert_eq!(fut.await, Ok(0));
    })
}

#[test]
fn registration_error_rejects() {
    async_io::block_on(async {
        let fut = from_callback::<u32, &str, _>(|_cb| Err("failed to register"));
        assert_eq!(fut.await, Err("failed to register"));
    })
}

#[test]
fn callback_settlement_beats_a_late_registration_error() {
    async_io::block_on(async {
        let fut = from_callback::<u32, &str, _>(|cb| {
            cb.call(Ok(42));
            Err("too late")
        });
        assert_eq!(fut.await, Ok(42));
    })
}

fn double(x: u32, cb: Callback<u32, &'static str>) -> Result<(), &'static str> {
    cb.call(Ok(x * 2));
    Ok(())
}

#[test]
fn promisify_wraps_a_callback_style_function() {
    async_io::block_on(async {
        let double = promisify(double);
        assert_eq!(double(21).await, Ok(42));
        assert_eq!(double(5).await, Ok(10));
    })
}

#[test]
fn promise_executor_resolves() {
    async_io::block_on(async {
        let fut = promise::<&str, u32, _>(|resolver| {
            resolver.resolve("meow");
            Ok(())
        });
        assert_eq!(fut.await, Ok("meow"));
    })
}

#[test]
fn promise_executor_error_rejects() {
    async_io::block_on(async {
        let fut = promise::<&str, u32, _>(|_resolver| Err(7));
        assert_eq!(fut.await, Err(7));
    })
}

#[test]
fn deferred_resolves_from_outside() {
    async_io::block_on(async {
        let (fut, resolver) = deferred::<u32, &str>();
        let resolve_later = async {
            sleep(Duration::from_millis(10)).await;
            resolver.resolve(7);
        };
        let (res, ()) = futures_lite::future::zip(fut, resolve_later).await;
        assert_eq!(res, Ok(7));
    })
}

#[test]
fn first_settlement_wins_across_clones() {
    async_io::block_on(async {
        let (fut, resolver) = deferred::<u32, &str>();
        let loser = resolver.clone();
        resolver.resolve(1);
        loser.reject("too late");
        assert_eq!(fut.await, Ok(1));
    })
}
