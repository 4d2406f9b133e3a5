use crate::utils::get_env_with_prefix;
use serde::{Deserialize, Serialize};

/// Call limiter configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitConfig {
    /// Maximum number of times the wrapped callback may execute
    ///
    /// Zero is valid: the wrapper never invokes its callback.
    #[serde(default = "default_max_calls")]
    pub max_calls: u32,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_calls: default_max_calls(),
        }
    }
}

impl LimitConfig {
    /// Create a new LimitConfig builder
    pub fn builder() -> LimitConfigBuilder {
        LimitConfigBuilder::new()
    }

    /// A configuration that allows exactly one invocation
    pub fn once() -> Self {
        Self { max_calls: 1 }
    }

    /// Load call limiter configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(max_calls) = get_env_with_prefix("LIMIT_MAX_CALLS") {
            if let Ok(val) = max_calls.parse() {
                config.max_calls = val;
            }
        }

        config
    }
}

/// Builder for LimitConfig
#[must_use = "builder does nothing until you call build()"]
pub struct LimitConfigBuilder {
    config: LimitConfig,
}

impl LimitConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: LimitConfig::default(),
        }
    }

    pub fn max_calls(mut self, max: u32) -> Self {
        self.config.max_calls = max;
        self
    }

    pub fn once(mut self) -> Self {
        self.config.max_calls = 1;
        self
    }

    pub fn build(self) -> LimitConfig {
        self.config
    }
}

impl Default for LimitConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn default_max_calls() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LimitConfig::default();
        assert_eq!(config.max_calls, 1);
    }

    #[test]
    fn test_once_config() {
        let config = LimitConfig::once();
        assert_eq!(config.max_calls, 1);
    }

    #[test]
    fn test_builder() {
        let config = LimitConfig::builder().max_calls(200).build();
        assert_eq!(config.max_calls, 200);
    }

    #[test]
    fn test_deserializes_with_default() {
        let config: LimitConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.max_calls, 1);

        let config: LimitConfig = serde_json::from_str(r#"{"max_calls": 5}"#).unwrap();
        assert_eq!(config.max_calls, 5);
    }
}
