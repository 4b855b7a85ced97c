//! Environment-driven configuration of the default logger

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// Variable selecting the minimum level
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// Variable selecting the default namespace
pub const ENV_LOG_NAMESPACE: &str = "LOG_NAMESPACE";
/// Older name of [`ENV_LOG_NAMESPACE`], read when the new one is unset
pub const ENV_LOG_PREFIX: &str = "LOG_PREFIX";

/// Settings used when the registry builds its default logger
///
/// Both settings are optional: a missing or unparseable level yields
/// [`LogLevel::DEFAULT`], a missing namespace yields an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub namespace: String,
}

impl LoggerConfig {
    pub fn new(level: LogLevel, namespace: impl Into<String>) -> Self {
        Self {
            level,
            namespace: namespace.into(),
        }
    }

    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    ///
    /// ```
    /// use rust_logger_facade::{LogLevel, LoggerConfig};
    ///
    /// let config = LoggerConfig::from_lookup(|key| match key {
    ///     "LOG_LEVEL" => Some("debug".to_string()),
    ///     "LOG_NAMESPACE" => Some("api".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.level, LogLevel::Debug);
    /// assert_eq!(config.namespace, "api");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let level = lookup(ENV_LOG_LEVEL)
            .map(|raw| LogLevel::parse(&raw))
            .unwrap_or_default();
        let namespace = lookup(ENV_LOG_NAMESPACE)
            .or_else(|| lookup(ENV_LOG_PREFIX))
            .unwrap_or_default();

        Self { level, namespace }
    }

    /// Like [`LoggerConfig::from_lookup`], but a level variable that is set to
    /// an unknown token is an error instead of falling back
    pub fn try_from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_LOG_LEVEL) {
            if raw.parse::<LogLevel>().is_err() {
                return Err(LoggerError::config(
                    ENV_LOG_LEVEL,
                    format!("unknown level '{}'", raw),
                ));
            }
        }
        Ok(Self::from_lookup(lookup))
    }
}
