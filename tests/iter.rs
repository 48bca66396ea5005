use std::cell::RefCell;

use futures_flow::iter;
use futures_flow::task::sleep;
use futures_flow::time::{Duration, Instant};

#[test]
fn map_returns_results_in_input_order() {
    async_io::block_on(async {
        // The slowest item comes first; completion order is c, b, a.
        let res: Result<Vec<&str>, &str> =
            iter::map([("a", 30u64), ("b", 10), ("c", 20)], |(name, ms), _index| {
                async move {
                    sleep(Duration::from_millis(ms)).await;
                    Ok(name)
                }
            })
            .await;
        assert_eq!(res.unwrap(), ["a", "b", "c"]);
    })
}

#[test]
fn map_starts_every_operation_before_any_completes() {
    async_io::block_on(async {
        let log = RefCell::new(Vec::new());
        let log = &log;
        let res: Result<Vec<()>, &str> = iter::map([0usize, 1, 2], |_item, index| async move {
            log.borrow_mut().push(format!("start {index}"));
            sleep(Duration::from_millis(20)).await;
            log.borrow_mut().push(format!("end {index}"));
            Ok(())
        })
        .await;
        assert!(res.is_ok());

        let log = log.borrow();
        let first_end = log.iter().position(|e| e.starts_with("end")).unwrap();
        let last_start = log
            .iter()
            .rposition(|e| e.starts_with("start"))
            .unwrap();
        assert!(last_start < first_end);
    })
}

#[test]
fn map_runs_items_concurrently() {
    async_io::block_on(async {
        let start = Instant::now();
        let res: Result<Vec<()>, &str> = iter::map([50u64, 50, 50], |ms, _index| async move {
            sleep(Duration::from_millis(ms)).await;
            Ok(())
        })
        .await;
        assert!(res.is_ok());
        // Roughly the longest item, nowhere near the 150ms sum.
        assert!(start.elapsed() < *Duration::from_millis(120));
    })
}

#[test]
fn map_rejects_with_the_first_error() {
    async_io::block_on(async {
        let start = Instant::now();
        let res: Result<Vec<u32>, &str> = iter::map([0u64, 1, 2], |item, _index| async move {
            if item == 1 {
                Err("boom")
            } else {
                sleep(Duration::from_millis(100)).await;
                Ok(item as u32)
            }
        })
        .await;
        assert_eq!(res.unwrap_err(), "boom");
        // The error settled the call without waiting out the siblings.
        assert!(start.elapsed() < *Duration::from_millis(100));
    })
}

#[test]
fn map_of_an_empty_sequence_resolves_immediately() {
    async_io::block_on(async {
        let res: Result<Vec<u32>, &str> =
            iter::map(Vec::<u32>::new(), |item, _index| async move { Ok(item) }).await;
        assert_eq!(res.unwrap(), Vec::<u32>::new());
    })
}

#[test]
fn map_series_never_overlaps_invocations() {
    async_io::block_on(async {
        let log = RefCell::new(Vec::new());
        let log = &log;
        let res: Result<Vec<usize>, &str> = iter::map_series([0usize, 1, 2], |item, index| {
            assert_eq!(item, index);
            async move {
                log.borrow_mut().push(format!("start {index}"));
                sleep(Duration::from_millis(10)).await;
                log.borrow_mut().push(format!("end {index}"));
                Ok(index)
            }
        })
        .await;
        assert_eq!(res.unwrap(), [0, 1, 2]);
        assert_eq!(
            *log.borrow(),
            ["start 0", "end 0", "start 1", "end 1", "start 2", "end 2"]
        );
    })
}

#[test]
fn map_series_short_circuits_on_error() {
    async_io::block_on(async {
        let invoked = RefCell::new(0);
        let invoked = &invoked;
        let res: Result<Vec<u32>, &str> = iter::map_series([0u32, 1, 2], |item, _index| {
            *invoked.borrow_mut() += 1;
            async move {
                if item == 1 {
                    Err("boom")
                } else {
                    Ok(item)
                }
            }
        })
        .await;
        assert_eq!(res.unwrap_err(), "boom");
        // Item 2 was never invoked.
        assert_eq!(*invoked.borrow(), 2);
    })
}

#[test]
fn each_visits_items_in_order_and_discards_results() {
    async_io::block_on(async {
        let seen = RefCell::new(Vec::new());
        let seen = &seen;
        let res: Result<(), &str> = iter::each(["a", "b", "c"], |item, index| async move {
            seen.borrow_mut().push((index, item));
            Ok(())
        })
        .await;
        assert!(res.is_ok());
        assert_eq!(*seen.borrow(), [(0, "a"), (1, "b"), (2, "c")]);
    })
}

#[test]
fn each_short_circuits_on_error() {
    async_io::block_on(async {
        let seen = RefCell::new(Vec::new());
        let seen = &seen;
        let res: Result<(), &str> = iter::each(["a", "b", "c"], |item, _index| async move {
            seen.borrow_mut().push(item);
            if item == "b" {
                Err("boom")
            } else {
                Ok(())
            }
        })
        .await;
        assert_eq!(res.unwrap_err(), "boom");
        assert_eq!(*seen.borrow(), ["a", "b"]);
    })
}
