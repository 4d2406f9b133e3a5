//! Tests for memoizing wrappers

use weir::testing::{counted, counted_shared};
use weir::{MemoConfig, Memoizer, NoOpStore, SharedMemoizer, memoize};

#[test]
fn test_square_computed_once() {
    let (square, count) = counted(|x: i64| x * x);
    let mut wrapped = memoize(square);

    assert_eq!(wrapped(4), 16);
    assert_eq!(wrapped(4), 16);
    assert_eq!(count.get(), 1, "square runs only on the first call");
}

#[test]
fn test_argument_order_distinguishes_keys() {
    let (add, count) = counted(|(a, b): (i32, i32)| a + b);
    let mut wrapped = memoize(add);

    // The key strategy serializes the argument tuple in order, so
    // (2, 3) and (3, 2) are distinct entries even though add commutes.
    assert_eq!(wrapped((2, 3)), 5);
    assert_eq!(wrapped((3, 2)), 5);
    assert_eq!(count.get(), 2);
}

#[test]
fn test_numeric_and_string_arguments_do_not_collide() {
    let (describe, count) = counted(|v: serde_json::Value| v.to_string());
    let mut wrapped = memoize(describe);

    assert_eq!(wrapped(serde_json::json!(4)), "4");
    assert_eq!(wrapped(serde_json::json!("4")), "\"4\"");
    assert_eq!(count.get(), 2, "4 and \"4\" are different argument values");
}

#[test]
fn test_distinct_arguments_each_computed_once() {
    let (square, count) = counted(|x: i64| x * x);
    let mut wrapped = memoize(square);

    for _ in 0..3 {
        assert_eq!(wrapped(2), 4);
        assert_eq!(wrapped(3), 9);
        assert_eq!(wrapped(4), 16);
    }
    assert_eq!(count.get(), 3, "one run per distinct argument");
}

#[test]
fn test_store_len_tracks_distinct_keys() {
    let mut wrapped = Memoizer::new(|x: u32| x + 1);

    assert!(wrapped.is_empty());
    wrapped.call(1);
    wrapped.call(1);
    wrapped.call(2);
    assert_eq!(wrapped.len(), 2);
}

#[test]
fn test_impure_callback_result_is_pinned() {
    // A callback whose result depends on invocation order: memoization
    // pins the first result for each argument value.
    let mut calls = 0;
    let mut wrapped = Memoizer::new(move |x: i32| {
        calls += 1;
        (x, calls)
    });

    assert_eq!(wrapped.call(10), (10, 1));
    assert_eq!(wrapped.call(10), (10, 1), "stored result, not a re-run");
    assert_eq!(wrapped.call(20), (20, 2));
}

#[test]
fn test_noop_store_disables_memoization() {
    let (square, count) = counted_shared(|x: i64| x * x);
    let mut wrapped = Memoizer::with_store(square, Box::new(NoOpStore));

    assert_eq!(wrapped.call(4), 16);
    assert_eq!(wrapped.call(4), 16);
    assert_eq!(count.get(), 2);
}

#[test]
fn test_from_config() {
    let config = MemoConfig::builder().in_memory().initial_capacity(8).build();
    let (square, count) = counted(|x: i64| x * x);
    let mut wrapped = Memoizer::from_config(square, &config);

    assert_eq!(wrapped.call(9), 81);
    assert_eq!(wrapped.call(9), 81);
    assert_eq!(count.get(), 1);
}

#[test]
fn test_structured_arguments() {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Serialize)]
    struct Request {
        path: String,
        depth: u8,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Response {
        visited: u8,
    }

    let (handle, count) = counted(|req: Request| Response { visited: req.depth });
    let mut wrapped = Memoizer::new(handle);

    let req = Request {
        path: "/a".to_string(),
        depth: 2,
    };
    assert_eq!(wrapped.call(req.clone()), Response { visited: 2 });
    assert_eq!(wrapped.call(req), Response { visited: 2 });
    assert_eq!(count.get(), 1);
}

#[test]
fn test_shared_memoizer_across_threads() {
    use std::thread;

    let (double, count) = counted_shared(|x: u64| x * 2);
    let wrapped = SharedMemoizer::new(double);

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for i in 0..10u64 {
                    assert_eq!(wrapped.call(i), i * 2);
                }
            });
        }
    });

    assert_eq!(count.get(), 10, "one run per distinct argument, even contended");
    assert_eq!(wrapped.len(), 10);
}
