//! Provider client seam and implementations.
//!
//! The dispatcher talks to the mail provider through the
//! [`ProviderClient`] trait; [`SendGridClient`] is the production
//! implementation.

mod sendgrid;

pub use sendgrid::{MailPayload, SENDGRID_API_URL, SendGridClient, SendGridConfig, SendGridFactory};

use crate::error::MailerResult;
use async_trait::async_trait;

/// Raw provider response, reduced to what classification needs.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// HTTP status code returned by the provider.
    pub status: u16,
    /// Response body; JSON-structured error detail on non-2xx.
    pub body: String,
}

/// A client bound to one credential, able to submit one payload.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Submit the payload to the provider.
    ///
    /// Errors represent transport-level faults only (network failure,
    /// request rejected before reaching the wire). Provider rejections
    /// come back as a [`ProviderResponse`] with a non-202 status.
    async fn send(&self, payload: &MailPayload) -> MailerResult<ProviderResponse>;
}

/// Builds provider clients bound to a per-send credential.
#[cfg_attr(test, mockall::automock)]
pub trait ProviderFactory: Send + Sync {
    /// A client authorized with `api_key`.
    fn client(&self, api_key: &str) -> Box<dyn ProviderClient>;
}
