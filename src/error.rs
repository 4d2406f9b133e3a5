/// The main error type for weir operations
///
/// Wrapper call paths never return these: a limited call that is over
/// budget is a defined steady-state (`None`), and a memoized call whose
/// key or store fails degrades to a direct invocation. Errors surface
/// only from the fallible APIs (`try_call`, [`crate::ResultStore`]
/// methods, configuration parsing).
#[derive(Debug, thiserror::Error)]
pub enum WeirError {
    #[error("key derivation failed: {0}")]
    Key(String),

    #[error("store error: {0}")]
    Store(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl WeirError {
    pub fn key(msg: impl Into<String>) -> Self {
        Self::Key(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type alias for weir operations
pub type Result<T> = std::result::Result<T, WeirError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_error() {
        let err = WeirError::key("NaN is not serializable");
        assert!(matches!(err, WeirError::Key(_)));
        assert_eq!(err.to_string(), "key derivation failed: NaN is not serializable");
    }

    #[test]
    fn test_store_error() {
        let err = WeirError::store("lock poisoned");
        assert!(matches!(err, WeirError::Store(_)));
        assert_eq!(err.to_string(), "store error: lock poisoned");
    }

    #[test]
    fn test_config_error() {
        let err = WeirError::config("unknown backend");
        assert!(matches!(err, WeirError::Config(_)));
        assert_eq!(err.to_string(), "invalid configuration: unknown backend");
    }
}
