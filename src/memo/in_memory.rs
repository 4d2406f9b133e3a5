//! In-memory result store backed by a hash map
//!
//! Entries live for the life of the store: no eviction, no size bound,
//! no expiry. A memoizer that sees many distinct argument values grows
//! its store without limit.

use crate::error::{Result, WeirError};
use crate::traits::store::ResultStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory result store
///
/// Reads take a shared lock, writes an exclusive one. Individual
/// operations are thread-safe; the get-then-put sequence of a memoized
/// call is made atomic by [`SharedMemoizer`](crate::SharedMemoizer),
/// not here.
///
/// # Example
///
/// ```rust
/// use weir::{InMemoryStore, ResultStore, ResultStoreExt};
///
/// let store = InMemoryStore::new();
/// store.put("[2,3]", &5).unwrap();
///
/// let hit: Option<i32> = store.get("[2,3]").unwrap();
/// assert_eq!(hit, Some(5));
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a pre-allocated capacity hint
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }
}

impl ResultStore for InMemoryStore {
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| WeirError::store("store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn put_bytes(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| WeirError::store("store lock poisoned"))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| WeirError::store("store lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| WeirError::store("store lock poisoned"))?;
        entries.clear();
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }
}
