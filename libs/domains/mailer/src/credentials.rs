//! Credential source seam.
//!
//! The API key lives in the host's settings, not in this crate. The
//! dispatcher asks an injected [`CredentialSource`] for it on every
//! send, so rotated keys take effect without rewiring.

use core_config::{ConfigError, require};
use std::env;

/// Default environment variable holding the SendGrid API key.
pub const SENDGRID_API_KEY_VAR: &str = "SENDGRID_API_KEY";

/// Supplies the provider API key, read once per send and never cached
/// by the adapter.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialSource: Send + Sync {
    /// The API key, or `None` when unconfigured.
    fn provider_api_key(&self) -> Option<String>;
}

/// Environment-backed credential source.
#[derive(Debug, Clone)]
pub struct EnvCredentialSource {
    var: String,
}

impl Default for EnvCredentialSource {
    fn default() -> Self {
        Self {
            var: SENDGRID_API_KEY_VAR.to_string(),
        }
    }
}

impl EnvCredentialSource {
    /// Source reading `var` instead of the default variable.
    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Fail-fast constructor: errors at wiring time when the key is
    /// unset or empty, so a misconfigured deployment is caught before
    /// the first send.
    pub fn from_env() -> Result<Self, ConfigError> {
        require(SENDGRID_API_KEY_VAR)?;
        Ok(Self::default())
    }
}

impl CredentialSource for EnvCredentialSource {
    fn provider_api_key(&self) -> Option<String> {
        env::var(&self.var).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_source_reads_key() {
        temp_env::with_var("MAILER_TEST_API_KEY", Some("SG.test"), || {
            let source = EnvCredentialSource::with_var("MAILER_TEST_API_KEY");
            assert_eq!(source.provider_api_key(), Some("SG.test".to_string()));
        });
    }

    #[test]
    fn test_env_source_returns_none_when_unset() {
        temp_env::with_var_unset("MAILER_TEST_API_KEY_UNSET", || {
            let source = EnvCredentialSource::with_var("MAILER_TEST_API_KEY_UNSET");
            assert_eq!(source.provider_api_key(), None);
        });
    }

    #[test]
    fn test_from_env_errors_when_key_missing() {
        temp_env::with_var_unset(SENDGRID_API_KEY_VAR, || {
            let err = EnvCredentialSource::from_env().unwrap_err();
            assert!(err.to_string().contains(SENDGRID_API_KEY_VAR));
        });
    }

    #[test]
    fn test_from_env_errors_when_key_empty() {
        temp_env::with_var(SENDGRID_API_KEY_VAR, Some(""), || {
            assert!(EnvCredentialSource::from_env().is_err());
        });
    }
}
