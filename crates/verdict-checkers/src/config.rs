//! Registry configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CheckerError, CheckerResult};

/// Level at which failed checks are logged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Debug,
    Info,
    Warn,
}

/// Configuration for a [`CheckerRegistry`](crate::CheckerRegistry).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Reject calls whose argument count differs from the checker's params.
    pub strict_arity: bool,
    /// Emit an event for passing checks as well as failing ones.
    pub log_passes: bool,
    /// Level used for failed checks.
    pub failure_level: LogLevel,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            strict_arity: false,
            log_passes: false,
            failure_level: LogLevel::Debug,
        }
    }
}

impl RegistryConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> CheckerResult<Self> {
        serde_json::from_str(json).map_err(|e| CheckerError::Configuration(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = RegistryConfig::default();
        assert!(!cfg.strict_arity);
        assert!(!cfg.log_passes);
        assert_eq!(cfg.failure_level, LogLevel::Debug);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = RegistryConfig::from_json(r#"{"strict_arity": true}"#).unwrap();
        assert!(cfg.strict_arity);
        assert!(!cfg.log_passes);

        let cfg = RegistryConfig::from_json(r#"{"failure_level": "warn"}"#).unwrap();
        assert_eq!(cfg.failure_level, LogLevel::Warn);
    }

    #[test]
    fn invalid_json_is_a_configuration_error() {
        let err = RegistryConfig::from_json(r#"{"failure_level": "loud"}"#).unwrap_err();
        assert!(matches!(err, CheckerError::Configuration(_)));
    }
}
