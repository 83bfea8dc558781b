//! Data models for the mailer domain.

/// An outbound mail request as handed over by the host application.
#[derive(Debug, Clone)]
pub struct SendRequest {
    /// Recipient addresses in host order. Only the first is dispatched;
    /// the rest are ignored, matching the host's observed contract.
    pub recipients: Vec<String>,
    /// Sender address. Must be valid `local@domain` syntax before
    /// dispatch is attempted.
    pub sender: String,
    /// Subject line, sent verbatim.
    pub subject: String,
    /// Plain-text body, sent verbatim.
    pub body: String,
}

/// Outcome of a single dispatch attempt.
///
/// Provider-level failures are values, not errors: the host decides
/// whether to show the reason to the user or fall back to its own
/// default delivery path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The provider accepted the message for delivery.
    Sent,
    /// The provider declined the message.
    Rejected {
        /// Diagnostic extracted from the provider's error body.
        reason: String,
    },
    /// The request never produced a provider response.
    TransportFailure {
        /// Message of the underlying transport fault.
        reason: String,
    },
}
