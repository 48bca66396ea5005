use futures_flow::task::sleep;
use futures_flow::time::{Duration, Instant};

#[test]
fn waits_at_least_the_duration() {
    async_io::block_on(async {
        let start = Instant::now();
        let dur = Duration::from_millis(50);
        sleep(dur).await;
        assert!(start.elapsed() >= *dur);
    })
}

#[test]
fn resolves_with_the_wake_instant() {
    async_io::block_on(async {
        let start = Instant::now();
        let woke = sleep(Duration::from_millis(10)).await;
        assert!(woke >= start);
    })
}
