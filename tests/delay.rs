use futures_flow::prelude::*;
use futures_flow::task::sleep;
use futures_flow::time::{Duration, Instant};

#[test]
fn resolution_waits_for_the_deadline() {
    async_io::block_on(async {
        let start = Instant::now();
        let delay = Duration::from_millis(30);
        let value = async { "meow" }.delay(delay).await;
        assert_eq!(value, "meow");
        assert!(start.elapsed() >= *delay);
    })
}

#[test]
fn any_future_works_as_a_deadline() {
    async_io::block_on(async {
        let start = Instant::now();
        let value = async { 7 }.delay(sleep(Duration::from_millis(20))).await;
        assert_eq!(value, 7);
        assert!(start.elapsed() >= *Duration::from_millis(20));
    })
}
