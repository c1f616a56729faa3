//! Logger configuration
//!
//! Settings can come from code, from any serde format, or from the
//! environment:
//!
//! - `ULOG_LEVEL`: level name, letter or rank (`warning`, `W`, `3`)
//! - `ULOG_MAX_MESSAGE_LENGTH`: maximum message length in bytes

use super::error::{LoggerError, Result};
use super::formatter::DEFAULT_MAX_MESSAGE_LENGTH;
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// Environment variable holding the threshold
pub const ENV_LEVEL: &str = "ULOG_LEVEL";

/// Environment variable holding the maximum message length
pub const ENV_MAX_MESSAGE_LENGTH: &str = "ULOG_MAX_MESSAGE_LENGTH";

/// Plain settings for a [`Logger`](crate::Logger).
///
/// ```
/// use ultralog::{LogLevel, LoggerConfig};
///
/// let config: LoggerConfig = serde_json::from_str(r#"{"level": "debug"}"#).unwrap();
/// assert_eq!(config.level, LogLevel::Debug);
/// assert_eq!(config.max_message_length, 2048);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub max_message_length: usize,
}

impl LoggerConfig {
    /// Defaults overridden by whatever the environment sets.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_LEVEL) {
            config.level = value
                .parse()
                .map_err(|_| LoggerError::config(ENV_LEVEL, format!("unknown level '{}'", value)))?;
        }

        if let Some(value) = lookup(ENV_MAX_MESSAGE_LENGTH) {
            config.max_message_length = value.trim().parse().map_err(|e| {
                LoggerError::config(ENV_MAX_MESSAGE_LENGTH, format!("'{}': {}", value, e))
            })?;
        }

        Ok(config)
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
        }
    }
}
