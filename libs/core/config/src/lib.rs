//! Core configuration
//!
//! Environment-variable backed configuration shared by the workspace
//! crates. Keeps configuration reads explicit and testable instead of
//! scattering `std::env::var` calls through domain code.

use std::env;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    Missing(String),

    #[error("Environment variable '{key}' is invalid: {reason}")]
    Invalid { key: String, reason: String },
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Load an environment variable, falling back to a default value
pub fn or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Load a required environment variable.
///
/// An empty value is treated as invalid, not as present: credentials
/// and endpoints are never legitimately empty strings.
pub fn require(key: &str) -> Result<String, ConfigError> {
    let value = env::var(key).map_err(|_| ConfigError::Missing(key.to_string()))?;
    if value.is_empty() {
        return Err(ConfigError::Invalid {
            key: key.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_returns_value_when_set() {
        temp_env::with_var("CORE_CONFIG_TEST_SET", Some("value"), || {
            assert_eq!(require("CORE_CONFIG_TEST_SET").unwrap(), "value");
        });
    }

    #[test]
    fn test_require_errors_when_unset() {
        temp_env::with_var_unset("CORE_CONFIG_TEST_UNSET", || {
            let err = require("CORE_CONFIG_TEST_UNSET").unwrap_err();
            assert!(err.to_string().contains("CORE_CONFIG_TEST_UNSET"));
            assert!(err.to_string().contains("required"));
        });
    }

    #[test]
    fn test_require_errors_when_empty() {
        temp_env::with_var("CORE_CONFIG_TEST_EMPTY", Some(""), || {
            let err = require("CORE_CONFIG_TEST_EMPTY").unwrap_err();
            assert!(err.to_string().contains("must not be empty"));
        });
    }

    #[test]
    fn test_or_default_prefers_env_value() {
        temp_env::with_var("CORE_CONFIG_TEST_DEFAULT", Some("from-env"), || {
            assert_eq!(or_default("CORE_CONFIG_TEST_DEFAULT", "fallback"), "from-env");
        });
    }

    #[test]
    fn test_or_default_falls_back_when_unset() {
        temp_env::with_var_unset("CORE_CONFIG_TEST_DEFAULT2", || {
            assert_eq!(or_default("CORE_CONFIG_TEST_DEFAULT2", "fallback"), "fallback");
        });
    }
}
