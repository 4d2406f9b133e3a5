//! Result store trait for memoized values
//!
//! This trait abstracts the backing store of a memoizer, allowing users
//! to swap between the in-memory map, the no-op store, or custom
//! implementations.

use crate::error::{Result, WeirError};

/// Key-value store for memoized results
///
/// Note: This trait uses type-erased serialization to be object-safe.
/// Use the helper methods `get` and `put` from [`ResultStoreExt`] which
/// handle serialization internally.
///
/// Implementations must be safe to call from multiple threads, but are
/// not required to make a get-then-put sequence atomic; the shared
/// memoizer guards that sequence itself.
pub trait ResultStore: Send + Sync {
    /// Get a stored result as JSON bytes
    ///
    /// Returns `Ok(None)` if the key has never been stored.
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store a result under a key, replacing any previous value
    ///
    /// The value is serialized JSON bytes. Entries live until `remove`
    /// or `clear`; there is no expiry.
    fn put_bytes(&self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Remove a stored result
    fn remove(&self, key: &str) -> Result<()>;

    /// Clear all stored results
    fn clear(&self) -> Result<()>;

    /// Number of entries currently stored
    fn len(&self) -> usize;

    /// Whether the store holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Helper trait for type-safe store operations
///
/// This provides the generic `get` and `put` methods that callers expect.
/// Implementations use the object-safe `get_bytes` and `put_bytes`
/// internally.
pub trait ResultStoreExt: ResultStore {
    /// Get a stored result
    fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        match self.get_bytes(key)? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|e| WeirError::store(format!("failed to deserialize stored result: {}", e))),
            None => Ok(None),
        }
    }

    /// Store a result
    fn put<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: serde::Serialize,
    {
        let bytes = serde_json::to_vec(value)
            .map_err(|e| WeirError::store(format!("failed to serialize result: {}", e)))?;
        self.put_bytes(key, bytes)
    }
}

// Blanket implementation - all ResultStore implementations get
// ResultStoreExt for free, including trait objects.
impl<S: ResultStore + ?Sized> ResultStoreExt for S {}
