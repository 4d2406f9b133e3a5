//! Testing utilities for wrapped callbacks
//!
//! The invariants this crate guarantees are about how many times a
//! callback runs, so the tools here count invocations without changing
//! a callback's behavior.
//!
//! # Example
//!
//! ```rust
//! use weir::Memoizer;
//! use weir::testing::counted;
//!
//! let (square, count) = counted(|x: i64| x * x);
//! let mut wrapped = Memoizer::new(square);
//!
//! wrapped.call(4);
//! wrapped.call(4);
//! assert_eq!(count.get(), 1);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Handle onto the number of times a counted callback has run
///
/// Cloneable; all clones observe the same counter.
#[derive(Clone, Debug, Default)]
pub struct CallCount(Arc<AtomicUsize>);

impl CallCount {
    /// Number of invocations so far
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn increment(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Wrap a callback so every invocation is counted
///
/// Returns the counting callback and a [`CallCount`] handle that stays
/// valid after the callback has been moved into a wrapper.
pub fn counted<F, A, R>(mut callback: F) -> (impl FnMut(A) -> R, CallCount)
where
    F: FnMut(A) -> R,
{
    let count = CallCount::default();
    let handle = count.clone();
    let counting = move |args| {
        count.increment();
        callback(args)
    };
    (counting, handle)
}

/// Like [`counted`], for callbacks shared across threads
///
/// The returned callback is `Fn`, as required by the `Shared*` wrappers.
pub fn counted_shared<F, A, R>(callback: F) -> (impl Fn(A) -> R, CallCount)
where
    F: Fn(A) -> R,
{
    let count = CallCount::default();
    let handle = count.clone();
    let counting = move |args| {
        count.increment();
        callback(args)
    };
    (counting, handle)
}
