use crate::error::Result;
use crate::memo::config::{MemoConfig, build_store};
use crate::memo::in_memory::InMemoryStore;
use crate::memo::key::derive_key;
use crate::traits::store::{ResultStore, ResultStoreExt};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Mutex;

/// Memoizing wrapper around a callback
///
/// The first invocation with a given argument value runs the callback
/// and stores the result; every later invocation with an equivalent
/// value (see [`derive_key`]) returns the stored result without running
/// the callback again. The default store grows without bound.
///
/// Calls take `&mut self`: this type is for a single logical thread of
/// control. Use [`SharedMemoizer`] to call through `&self` from several
/// threads.
///
/// # Example
///
/// ```rust
/// use weir::Memoizer;
///
/// let mut factorial = Memoizer::new(|n: u64| (1..=n).product::<u64>());
/// assert_eq!(factorial.call(5), 120);
/// assert_eq!(factorial.call(5), 120); // store hit, callback not re-run
/// assert_eq!(factorial.len(), 1);
/// ```
pub struct Memoizer<F, A, R> {
    callback: F,
    store: Box<dyn ResultStore>,
    _call: PhantomData<fn(A) -> R>,
}

impl<F, A, R> Memoizer<F, A, R>
where
    F: FnMut(A) -> R,
    A: Serialize,
    R: Serialize + DeserializeOwned,
{
    /// Wrap a callback with the default in-memory store
    pub fn new(callback: F) -> Self {
        Self::with_store(callback, Box::new(InMemoryStore::new()))
    }

    /// Wrap a callback with an explicit store backend
    pub fn with_store(callback: F, store: Box<dyn ResultStore>) -> Self {
        Self {
            callback,
            store,
            _call: PhantomData,
        }
    }

    /// Wrap a callback with a store built from [`MemoConfig`]
    pub fn from_config(callback: F, config: &MemoConfig) -> Self {
        Self::with_store(callback, build_store(config))
    }

    /// Invoke the wrapped callback, consulting the store first
    ///
    /// Never fails: if the arguments cannot be keyed or the store
    /// misbehaves, the call is logged and served by invoking the
    /// callback directly, uncached.
    pub fn call(&mut self, args: A) -> R {
        let key = match derive_key(&args) {
            Ok(key) => key,
            Err(err) => {
                tracing::warn!(error = %err, "cannot key arguments, invoking uncached");
                return (self.callback)(args);
            }
        };

        match self.store.get::<R>(&key) {
            Ok(Some(hit)) => {
                tracing::trace!(%key, "store hit");
                return hit;
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, %key, "store read failed, invoking uncached");
                return (self.callback)(args);
            }
        }

        let result = (self.callback)(args);
        if let Err(err) = self.store.put(&key, &result) {
            tracing::warn!(error = %err, %key, "store write failed, result not kept");
        }
        result
    }

    /// Fallible variant of [`call`](Self::call)
    ///
    /// Surfaces key-derivation and store errors instead of degrading to
    /// an uncached invocation.
    pub fn try_call(&mut self, args: A) -> Result<R> {
        let key = derive_key(&args)?;
        if let Some(hit) = self.store.get::<R>(&key)? {
            return Ok(hit);
        }
        let result = (self.callback)(args);
        self.store.put(&key, &result)?;
        Ok(result)
    }

    /// Number of results currently stored
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether no results have been stored yet
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

/// Wrap a callback in a memoizing closure
///
/// The closure form of [`Memoizer`]: derive a key from the arguments,
/// run the callback on a miss, return the stored result on a hit.
///
/// # Example
///
/// ```rust
/// use weir::memoize;
///
/// let mut square = memoize(|x: i64| x * x);
/// assert_eq!(square(4), 16);
/// assert_eq!(square(4), 16);
/// ```
pub fn memoize<F, A, R>(callback: F) -> impl FnMut(A) -> R
where
    F: FnMut(A) -> R,
    A: Serialize,
    R: Serialize + DeserializeOwned,
{
    let mut memoizer = Memoizer::new(callback);
    move |args| memoizer.call(args)
}

/// Memoizing wrapper callable from several threads
///
/// Semantics match [`Memoizer`], with the check-then-insert sequence
/// guarded by a mutex as a single atomic unit: concurrent callers with
/// equivalent arguments still run the callback at most once per key.
/// The lock is held across the callback, so concurrent calls serialize;
/// this trades throughput for the at-most-once guarantee.
pub struct SharedMemoizer<F, A, R> {
    callback: F,
    store: Mutex<Box<dyn ResultStore>>,
    _call: PhantomData<fn(A) -> R>,
}

impl<F, A, R> SharedMemoizer<F, A, R>
where
    F: Fn(A) -> R,
    A: Serialize,
    R: Serialize + DeserializeOwned,
{
    /// Wrap a callback with the default in-memory store
    pub fn new(callback: F) -> Self {
        Self::with_store(callback, Box::new(InMemoryStore::new()))
    }

    /// Wrap a callback with an explicit store backend
    pub fn with_store(callback: F, store: Box<dyn ResultStore>) -> Self {
        Self {
            callback,
            store: Mutex::new(store),
            _call: PhantomData,
        }
    }

    /// Wrap a callback with a store built from [`MemoConfig`]
    pub fn from_config(callback: F, config: &MemoConfig) -> Self {
        Self::with_store(callback, build_store(config))
    }

    /// Invoke the wrapped callback, consulting the store first
    ///
    /// Never fails; degraded calls are served uncached, as with
    /// [`Memoizer::call`].
    pub fn call(&self, args: A) -> R {
        let key = match derive_key(&args) {
            Ok(key) => key,
            Err(err) => {
                tracing::warn!(error = %err, "cannot key arguments, invoking uncached");
                return (self.callback)(args);
            }
        };

        let store = match self.store.lock() {
            Ok(store) => store,
            Err(_) => {
                tracing::warn!(%key, "store lock poisoned, invoking uncached");
                return (self.callback)(args);
            }
        };

        match store.get::<R>(&key) {
            Ok(Some(hit)) => {
                tracing::trace!(%key, "store hit");
                return hit;
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, %key, "store read failed, invoking uncached");
                return (self.callback)(args);
            }
        }

        let result = (self.callback)(args);
        if let Err(err) = store.put(&key, &result) {
            tracing::warn!(error = %err, %key, "store write failed, result not kept");
        }
        result
    }

    /// Number of results currently stored
    pub fn len(&self) -> usize {
        self.store.lock().map(|store| store.len()).unwrap_or(0)
    }

    /// Whether no results have been stored yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
