use crate::limit::config::LimitConfig;
use std::sync::atomic::{AtomicU32, Ordering};

/// Call-limiting wrapper around a callback
///
/// The callback executes at most `limit` times for the lifetime of the
/// wrapper, no matter how many times the wrapper itself is called. Once
/// the budget is spent, calls return `None` without touching the
/// callback.
///
/// Calls take `&mut self`: this type is for a single logical thread of
/// control. Use [`SharedCallLimiter`] to call through `&self` from
/// several threads.
///
/// # Example
///
/// ```rust
/// use weir::CallLimiter;
///
/// let mut wrapped = CallLimiter::new(|x: i32| x + 1, 2);
/// assert_eq!(wrapped.call(1), Some(2));
/// assert_eq!(wrapped.call(2), Some(3));
/// assert_eq!(wrapped.call(3), None); // budget spent, callback not run
/// assert!(wrapped.is_exhausted());
/// ```
pub struct CallLimiter<F> {
    callback: F,
    limit: u32,
    used: u32,
}

impl<F> CallLimiter<F> {
    /// Wrap a callback with an invocation budget
    pub fn new(callback: F, limit: u32) -> Self {
        Self {
            callback,
            limit,
            used: 0,
        }
    }

    /// Wrap a callback with a budget taken from [`LimitConfig`]
    pub fn from_config(callback: F, config: &LimitConfig) -> Self {
        Self::new(callback, config.max_calls)
    }

    /// Invoke the wrapped callback if budget remains
    ///
    /// Returns `Some(result)` while the invocation counter is below the
    /// limit, `None` after. Exceeding the limit is a defined steady
    /// state, not an error.
    pub fn call<A, R>(&mut self, args: A) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        if self.used == self.limit {
            tracing::debug!(limit = self.limit, "call budget spent, dropping invocation");
            return None;
        }
        self.used += 1;
        Some((self.callback)(args))
    }

    /// The configured invocation budget
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of times the callback has executed
    pub fn calls_made(&self) -> u32 {
        self.used
    }

    /// Invocations left before calls become no-ops
    pub fn remaining(&self) -> u32 {
        self.limit - self.used
    }

    /// Whether the budget is spent
    pub fn is_exhausted(&self) -> bool {
        self.used == self.limit
    }
}

/// Wrap a callback in a call-limiting closure
///
/// The closure form of [`CallLimiter`]: invokes the callback and returns
/// `Some(result)` for the first `limit` calls, `None` afterwards.
///
/// # Example
///
/// ```rust
/// use weir::limit_calls;
///
/// let mut greet = limit_calls(|name: &str| format!("hello {name}"), 1);
/// assert_eq!(greet("ada").as_deref(), Some("hello ada"));
/// assert_eq!(greet("ada"), None);
/// ```
pub fn limit_calls<F, A, R>(callback: F, limit: u32) -> impl FnMut(A) -> Option<R>
where
    F: FnMut(A) -> R,
{
    let mut limiter = CallLimiter::new(callback, limit);
    move |args| limiter.call(args)
}

/// Call-limiting wrapper callable from several threads
///
/// Semantics match [`CallLimiter`]. A slot is reserved with an atomic
/// compare-and-swap before the callback runs, so the at-most-`limit`
/// guarantee holds under concurrent callers: the counter never passes
/// the limit, and no invocation runs without a reserved slot.
pub struct SharedCallLimiter<F> {
    callback: F,
    limit: u32,
    used: AtomicU32,
}

impl<F> SharedCallLimiter<F> {
    /// Wrap a callback with an invocation budget
    pub fn new(callback: F, limit: u32) -> Self {
        Self {
            callback,
            limit,
            used: AtomicU32::new(0),
        }
    }

    /// Wrap a callback with a budget taken from [`LimitConfig`]
    pub fn from_config(callback: F, config: &LimitConfig) -> Self {
        Self::new(callback, config.max_calls)
    }

    /// Invoke the wrapped callback if budget remains
    pub fn call<A, R>(&self, args: A) -> Option<R>
    where
        F: Fn(A) -> R,
    {
        let reserved = self
            .used
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |used| {
                if used == self.limit { None } else { Some(used + 1) }
            });

        match reserved {
            Ok(_) => Some((self.callback)(args)),
            Err(_) => {
                tracing::debug!(limit = self.limit, "call budget spent, dropping invocation");
                None
            }
        }
    }

    /// The configured invocation budget
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of times the callback has executed
    pub fn calls_made(&self) -> u32 {
        self.used.load(Ordering::Acquire)
    }

    /// Invocations left before calls become no-ops
    pub fn remaining(&self) -> u32 {
        self.limit - self.calls_made()
    }

    /// Whether the budget is spent
    pub fn is_exhausted(&self) -> bool {
        self.calls_made() == self.limit
    }
}
