//! Error types for the mailer domain.

use thiserror::Error;

/// Result type for mailer operations.
pub type MailerResult<T> = Result<T, MailerError>;

/// Errors that cross the host boundary.
///
/// Only misconfiguration surfaces as an error: the host cannot proceed
/// without an administrator fixing it. Provider-level failures are
/// returned as [`DispatchOutcome`](crate::models::DispatchOutcome)
/// values instead.
#[derive(Debug, Error)]
pub enum MailerError {
    /// The credential source supplied no usable API key.
    #[error("missing or invalid provider API key")]
    MissingApiKey,

    /// The sender address failed syntax validation. Checked up front
    /// because the provider's own rejection for this is cryptic.
    #[error("invalid sender address: {0}")]
    InvalidSender(String),

    /// The host supplied an empty recipient list.
    #[error("no recipient addresses supplied")]
    NoRecipients,

    /// Transport-level fault while talking to the provider.
    ///
    /// Internal channel between client and dispatcher only: `dispatch`
    /// converts this to `DispatchOutcome::TransportFailure` before
    /// returning, so it never reaches the host.
    #[error("transport error: {0}")]
    Transport(String),

    /// Configuration error from production wiring.
    #[error("configuration error: {0}")]
    Config(#[from] core_config::ConfigError),
}

impl From<reqwest::Error> for MailerError {
    fn from(err: reqwest::Error) -> Self {
        MailerError::Transport(err.to_string())
    }
}
