use crate::error::Result;
use crate::traits::store::ResultStore;

/// No-op result store
///
/// This store does nothing - all operations succeed but nothing is kept,
/// so a memoizer built on it recomputes every call. Useful for disabling
/// memoization in tests without changing call sites.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpStore;

impl ResultStore for NoOpStore {
    fn get_bytes(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    fn put_bytes(&self, _key: &str, _value: Vec<u8>) -> Result<()> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        Ok(())
    }

    fn len(&self) -> usize {
        0
    }
}
