//! Dispatch pipeline: validate, build payload, send, classify.

use crate::credentials::CredentialSource;
use crate::error::{MailerError, MailerResult};
use crate::models::{DispatchOutcome, SendRequest};
use crate::providers::{MailPayload, ProviderFactory, ProviderResponse};
use serde::Deserialize;
use tracing::{debug, error, info};
use validator::ValidateEmail;

/// Status SendGrid returns when a message is accepted for delivery.
const STATUS_ACCEPTED: u16 = 202;

/// Fallback reason when the provider's error body cannot be parsed.
/// The most common cause in practice is a sender address that does not
/// match a verified Sender Identity on the provider side.
const UNVERIFIED_SENDER_HINT: &str =
    "the configured sender address does not match a verified Sender Identity";

/// Structured error body returned by SendGrid on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    errors: Vec<ProviderErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    message: String,
}

/// Stateless mail dispatcher.
///
/// Holds no mutable state; each [`dispatch`](Self::dispatch) call is
/// independent and safe to run concurrently.
pub struct MailDispatcher<S, F> {
    credentials: S,
    factory: F,
}

impl<S: CredentialSource, F: ProviderFactory> MailDispatcher<S, F> {
    /// Create a dispatcher with explicit collaborators.
    pub fn new(credentials: S, factory: F) -> Self {
        Self {
            credentials,
            factory,
        }
    }

    /// Run one atomic send attempt.
    ///
    /// Precondition failures (missing key, bad sender, no recipients)
    /// return `Err`; once the provider is involved, every outcome is a
    /// [`DispatchOutcome`] value. Exactly one outbound call is made per
    /// invocation, and none at all when a precondition fails.
    pub async fn dispatch(&self, request: &SendRequest) -> MailerResult<DispatchOutcome> {
        let api_key = self
            .credentials
            .provider_api_key()
            .filter(|key| !key.is_empty())
            .ok_or(MailerError::MissingApiKey)?;

        if !request.sender.validate_email() {
            return Err(MailerError::InvalidSender(request.sender.clone()));
        }

        // Only the first recipient is sent, matching the host contract.
        let recipient = request
            .recipients
            .first()
            .ok_or(MailerError::NoRecipients)?;

        let payload = MailPayload::new(&request.sender, recipient, &request.subject, &request.body);

        debug!(to = %recipient, subject = %request.subject, "Dispatching outbound mail");

        let client = self.factory.client(&api_key);
        match client.send(&payload).await {
            Ok(response) => Ok(classify(response, recipient)),
            Err(MailerError::Transport(reason)) => {
                error!(to = %recipient, error = %reason, "Transport failure during dispatch");
                Ok(DispatchOutcome::TransportFailure { reason })
            }
            Err(err) => {
                error!(to = %recipient, error = %err, "Provider client failed before response");
                Ok(DispatchOutcome::TransportFailure {
                    reason: err.to_string(),
                })
            }
        }
    }
}

fn classify(response: ProviderResponse, recipient: &str) -> DispatchOutcome {
    if response.status == STATUS_ACCEPTED {
        info!(to = %recipient, "Provider accepted mail for delivery");
        return DispatchOutcome::Sent;
    }

    let reason = serde_json::from_str::<ProviderErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.errors.into_iter().next())
        .map(|detail| detail.message)
        .unwrap_or_else(|| UNVERIFIED_SENDER_HINT.to_string());

    error!(
        to = %recipient,
        status = response.status,
        reason = %reason,
        "Provider rejected mail"
    );
    DispatchOutcome::Rejected { reason }
}
