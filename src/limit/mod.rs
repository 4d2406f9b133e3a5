//! Call-limiting function wrappers.
//!
//! Wraps a callback so it may only execute a bounded number of times
//! over the wrapper's lifetime. Exceeding the limit is not an error:
//! excess calls are silent no-ops returning `None`.

mod config;
mod limiter;

pub use config::{LimitConfig, LimitConfigBuilder};
pub use limiter::{CallLimiter, SharedCallLimiter, limit_calls};
