//! Host-facing hook surface.
//!
//! The host calls [`MailHook::on_outbound_mail`] with the message it
//! was about to deliver itself. The hook reports back whether to skip
//! the default delivery path or show a delivery failure to the user;
//! misconfiguration propagates as an error so the host can abort.

use std::collections::HashMap;

use crate::credentials::{CredentialSource, EnvCredentialSource};
use crate::dispatch::MailDispatcher;
use crate::error::MailerResult;
use crate::models::{DispatchOutcome, SendRequest};
use crate::providers::{ProviderFactory, SendGridConfig, SendGridFactory};
use core_config::FromEnv;

/// What the host should do after the hook ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookResponse {
    /// Mail handed to the provider; skip the host's default delivery.
    SkipDefault,
    /// Delivery failed; the host shows the message or falls back to
    /// its own delivery mechanism.
    DeliveryFailed(String),
}

/// Outbound-mail hook wrapping a [`MailDispatcher`].
pub struct MailHook<S, F> {
    dispatcher: MailDispatcher<S, F>,
}

impl MailHook<EnvCredentialSource, SendGridFactory> {
    /// Production wiring: env-backed credential source and the real
    /// SendGrid transport.
    pub fn from_env() -> MailerResult<Self> {
        let credentials = EnvCredentialSource::from_env()?;
        let factory = SendGridFactory::new(SendGridConfig::from_env()?);
        Ok(Self::new(MailDispatcher::new(credentials, factory)))
    }
}

impl<S: CredentialSource, F: ProviderFactory> MailHook<S, F> {
    /// Wrap an explicitly wired dispatcher.
    pub fn new(dispatcher: MailDispatcher<S, F>) -> Self {
        Self { dispatcher }
    }

    /// Handle one outbound-mail event.
    ///
    /// `headers` are accepted for contract compatibility and ignored;
    /// the provider sets its own transport headers.
    pub async fn on_outbound_mail(
        &self,
        _headers: &HashMap<String, String>,
        recipients: &[String],
        sender: &str,
        subject: &str,
        body: &str,
    ) -> MailerResult<HookResponse> {
        let request = SendRequest {
            recipients: recipients.to_vec(),
            sender: sender.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        };

        match self.dispatcher.dispatch(&request).await? {
            DispatchOutcome::Sent => Ok(HookResponse::SkipDefault),
            DispatchOutcome::Rejected { reason }
            | DispatchOutcome::TransportFailure { reason } => {
                Ok(HookResponse::DeliveryFailed(reason))
            }
        }
    }
}
