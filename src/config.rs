//! Configuration for operation contexts.
//!
//! Values come from environment variables under a prefix, or, with the
//! `config` feature, from JSON. Anything not given keeps its default.

use std::env;
#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};
use crate::error::{FlyweightError, FlyweightResult};
use crate::output::SinkKind;

/// Environment prefix used by [`OperationConfig::from_env`].
pub const DEFAULT_ENV_PREFIX: &str = "FLYWEIGHT";

/// Default prefix for [`LoggingObserver`](crate::LoggingObserver) lines.
pub const DEFAULT_LOG_PREFIX: &str = "[flyweight]";

/// Settings for building an [`OperationContext`](crate::OperationContext).
///
/// # Examples
///
/// ```
/// use flyweight_unshared::{OperationConfig, SinkKind};
///
/// let config = OperationConfig::from_lookup("APP", |key| match key {
///     "APP_SINK" => Some("buffer".to_string()),
///     "APP_LOG" => Some("1".to_string()),
///     _ => None,
/// })
/// .unwrap();
///
/// assert_eq!(config.sink, SinkKind::Buffer);
/// assert!(config.log_operations);
/// assert_eq!(config.log_prefix, "[flyweight]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct OperationConfig {
    /// Where operation lines go
    pub sink: SinkKind,
    /// Attach a logging observer
    pub log_operations: bool,
    /// Prefix for logged lines
    pub log_prefix: String,
}

impl Default for OperationConfig {
    fn default() -> Self {
        Self {
            sink: SinkKind::Stdout,
            log_operations: false,
            log_prefix: DEFAULT_LOG_PREFIX.to_string(),
        }
    }
}

impl OperationConfig {
    /// Reads `FLYWEIGHT_SINK`, `FLYWEIGHT_LOG` and `FLYWEIGHT_LOG_PREFIX`.
    pub fn from_env() -> FlyweightResult<Self> {
        Self::from_env_with_prefix(DEFAULT_ENV_PREFIX)
    }

    /// Reads `<PREFIX>_SINK`, `<PREFIX>_LOG` and `<PREFIX>_LOG_PREFIX`.
    ///
    /// The prefix is upper-cased.
    pub fn from_env_with_prefix(prefix: &str) -> FlyweightResult<Self> {
        Self::from_lookup(prefix, |key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// Keys are formed as in [`from_env_with_prefix`](Self::from_env_with_prefix).
    /// Unset keys keep their defaults; unparsable values are
    /// [`FlyweightError::Config`].
    pub fn from_lookup<F>(prefix: &str, lookup: F) -> FlyweightResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = prefix.to_uppercase();
        let key = |name: &str| format!("{}_{}", prefix, name);
        let mut config = Self::default();

        if let Some(raw) = lookup(&key("SINK")) {
            config.sink = raw.parse()?;
        }
        if let Some(raw) = lookup(&key("LOG")) {
            config.log_operations = parse_flag(&key("LOG"), &raw)?;
        }
        if let Some(raw) = lookup(&key("LOG_PREFIX")) {
            config.log_prefix = raw;
        }

        Ok(config)
    }

    /// Parses a JSON object. Missing fields keep their defaults.
    ///
    /// Sink names are matched case-insensitively, as in the environment.
    #[cfg(feature = "config")]
    pub fn from_json_str(json: &str) -> FlyweightResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| FlyweightError::Config(format!("invalid JSON: {}", e)))
    }

    /// Serializes to a JSON object.
    #[cfg(feature = "config")]
    pub fn to_json_string(&self) -> FlyweightResult<String> {
        serde_json::to_string(self)
            .map_err(|e| FlyweightError::Config(format!("cannot serialize: {}", e)))
    }
}

fn parse_flag(key: &str, raw: &str) -> FlyweightResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(FlyweightError::Config(format!("{} is not a boolean: {}", key, other))),
    }
}
