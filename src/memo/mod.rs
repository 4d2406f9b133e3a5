//! Memoizing function wrappers with pluggable result stores.
//!
//! Wraps a callback so repeated invocations with previously-seen
//! arguments return a stored result instead of re-invoking the callback.
//! Provides the in-memory store by default, with a no-op store for
//! disabling memoization in tests.

mod config;
mod in_memory;
mod key;
mod memoizer;
mod noop;

pub use config::{MemoConfig, MemoConfigBuilder, StoreBackend, build_store};
pub use in_memory::InMemoryStore;
pub use key::derive_key;
pub use memoizer::{Memoizer, SharedMemoizer, memoize};
pub use noop::NoOpStore;
