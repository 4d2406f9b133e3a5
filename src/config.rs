use crate::limit::LimitConfig;
use crate::memo::MemoConfig;
use crate::utils::get_env_with_prefix;
use serde::{Deserialize, Serialize};

/// Main configuration for weir wrappers
///
/// Composes the per-component configs so an application can load one
/// document (or the environment) and hand each wrapper its slice.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub limit: LimitConfig,
    #[serde(default)]
    pub memo: MemoConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_json")]
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            limit: LimitConfig::default(),
            memo: MemoConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: default_json(),
        }
    }
}

impl Config {
    /// Create a new Config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Load configuration from environment variables
    ///
    /// Each component reads its own `WEIR_`-prefixed variables; logging
    /// reads `WEIR_LOG_LEVEL` and `WEIR_LOG_JSON`.
    pub fn from_env() -> Self {
        let mut config = Self {
            logging: LoggingConfig::default(),
            limit: LimitConfig::from_env(),
            memo: MemoConfig::from_env(),
        };

        if let Some(level) = get_env_with_prefix("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(json) = get_env_with_prefix("LOG_JSON") {
            config.logging.json = json.parse().unwrap_or(false);
        }

        config
    }
}

/// Builder for Config
///
/// # Example
///
/// ```rust
/// use weir::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_max_calls(3)
///     .with_log_level("debug")
///     .build();
///
/// assert_eq!(config.limit.max_calls, 3);
/// assert_eq!(config.logging.level, "debug");
/// ```
#[must_use = "builder does nothing until you call build()"]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Replace the whole config with values from the environment
    pub fn from_env(mut self) -> Self {
        self.config = Config::from_env();
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    pub fn with_json_logging(mut self, enabled: bool) -> Self {
        self.config.logging.json = enabled;
        self
    }

    pub fn with_limit(mut self, limit: LimitConfig) -> Self {
        self.config.limit = limit;
        self
    }

    pub fn with_max_calls(mut self, max_calls: u32) -> Self {
        self.config.limit.max_calls = max_calls;
        self
    }

    pub fn with_memo(mut self, memo: MemoConfig) -> Self {
        self.config.memo = memo;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_json() -> bool {
    false
}
