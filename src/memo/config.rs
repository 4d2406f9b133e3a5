use crate::memo::in_memory::InMemoryStore;
use crate::memo::noop::NoOpStore;
use crate::traits::store::ResultStore;
use crate::utils::get_env_with_prefix;
use serde::{Deserialize, Serialize};

/// Result store backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// In-memory store (default)
    InMemory,
    /// No-op store (memoization disabled)
    NoOp,
}

impl Default for StoreBackend {
    fn default() -> Self {
        Self::InMemory
    }
}

/// Memoizer configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MemoConfig {
    /// Result store backend type
    #[serde(default)]
    pub backend: StoreBackend,

    /// Pre-allocated capacity hint for the in-memory store (0 = none)
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

impl Default for MemoConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            initial_capacity: default_initial_capacity(),
        }
    }
}

impl MemoConfig {
    /// Create a new MemoConfig builder
    pub fn builder() -> MemoConfigBuilder {
        MemoConfigBuilder::new()
    }

    /// Load memoizer configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(backend) = get_env_with_prefix("MEMO_BACKEND") {
            config.backend = match backend.to_lowercase().as_str() {
                "noop" => StoreBackend::NoOp,
                "inmemory" => StoreBackend::InMemory,
                other => {
                    tracing::warn!(backend = other, "unknown memo backend, using in-memory");
                    StoreBackend::InMemory
                }
            };
        }

        if let Some(capacity) = get_env_with_prefix("MEMO_INITIAL_CAPACITY") {
            if let Ok(val) = capacity.parse() {
                config.initial_capacity = val;
            }
        }

        config
    }
}

/// Builder for MemoConfig
#[must_use = "builder does nothing until you call build()"]
pub struct MemoConfigBuilder {
    config: MemoConfig,
}

impl MemoConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: MemoConfig::default(),
        }
    }

    pub fn backend(mut self, backend: StoreBackend) -> Self {
        self.config.backend = backend;
        self
    }

    pub fn in_memory(mut self) -> Self {
        self.config.backend = StoreBackend::InMemory;
        self
    }

    pub fn noop(mut self) -> Self {
        self.config.backend = StoreBackend::NoOp;
        self
    }

    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    pub fn build(self) -> MemoConfig {
        self.config
    }
}

impl Default for MemoConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a result store from MemoConfig
pub fn build_store(config: &MemoConfig) -> Box<dyn ResultStore> {
    match config.backend {
        StoreBackend::InMemory => Box::new(InMemoryStore::with_capacity(config.initial_capacity)),
        StoreBackend::NoOp => Box::new(NoOpStore),
    }
}

fn default_initial_capacity() -> usize {
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MemoConfig::default();
        assert_eq!(config.backend, StoreBackend::InMemory);
        assert_eq!(config.initial_capacity, 0);
    }

    #[test]
    fn test_builder() {
        let config = MemoConfig::builder()
            .noop()
            .initial_capacity(64)
            .build();

        assert_eq!(config.backend, StoreBackend::NoOp);
        assert_eq!(config.initial_capacity, 64);
    }

    #[test]
    fn test_build_store_in_memory() {
        let config = MemoConfig::builder().in_memory().build();
        let store = build_store(&config);
        assert!(store.is_empty());
        store.put_bytes("k", vec![1]).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_build_store_noop() {
        let config = MemoConfig::builder().noop().build();
        let store = build_store(&config);
        store.put_bytes("k", vec![1]).unwrap();
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_backend_deserializes_lowercase() {
        let config: MemoConfig = serde_json::from_str(r#"{"backend": "noop"}"#).unwrap();
        assert_eq!(config.backend, StoreBackend::NoOp);
    }
}
