//! Weir - call-limiting and memoizing wrappers for callbacks
//!
//! Weir wraps plain callbacks in higher-order factories with enforced
//! invocation contracts:
//!
//! - **Call limiting**: the wrapped callback executes at most `limit`
//!   times for the lifetime of the wrapper; excess calls are silent
//!   no-ops returning `None`.
//! - **Memoization**: repeated invocations with previously-seen
//!   arguments return a stored result instead of re-invoking the
//!   callback, with an explicit, documented key-derivation strategy
//!   and pluggable result stores.
//!
//! Each wrapper comes as a closure factory, an owning struct for a
//! single thread of control, and a `Shared*` struct whose guarantees
//! hold under concurrent callers.
//!
//! # Quick Start
//!
//! ```rust
//! use weir::{limit_calls, memoize};
//!
//! // Initialize logging (once, early in your application)
//! // weir::init_tracing();
//!
//! let mut square = memoize(|x: i64| x * x);
//! assert_eq!(square(4), 16);
//! assert_eq!(square(4), 16); // served from the store
//!
//! let mut greet = limit_calls(|name: &str| format!("hello {name}"), 1);
//! assert!(greet("ada").is_some());
//! assert!(greet("ada").is_none()); // budget spent
//! ```

mod config;
mod error;
pub mod iter;
pub mod limit;
pub mod memo;
pub mod recurse;
pub mod testing;
pub mod traits;
mod utils;

// Re-exports for public API
pub use config::{Config, ConfigBuilder, LoggingConfig};
pub use error::{Result, WeirError};
pub use limit::{CallLimiter, LimitConfig, LimitConfigBuilder, SharedCallLimiter, limit_calls};
pub use memo::{
    InMemoryStore, MemoConfig, MemoConfigBuilder, Memoizer, NoOpStore, SharedMemoizer,
    StoreBackend, build_store, derive_key, memoize,
};
pub use traits::store::{ResultStore, ResultStoreExt};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging with sensible defaults
///
/// This should be called early in your application, before wrappers
/// start handling calls.
///
/// # Environment Variables
///
/// - `RUST_LOG`: Set log level (e.g., "info", "debug", "weir=trace")
/// - `WEIR_LOG_JSON`: Set to "true" for JSON formatted logs
///
/// # Example
///
/// ```rust,no_run
/// weir::init_tracing();
/// ```
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json_logs = std::env::var("WEIR_LOG_JSON")
        .map(|v| v.parse::<bool>().unwrap_or(false))
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Initialize tracing with a custom configuration
pub fn init_tracing_with_config(config: &Config) {
    let env_filter = EnvFilter::new(&config.logging.level);

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
