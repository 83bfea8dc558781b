//! Mailer Domain
//!
//! Adapter that takes over a host application's outbound e-mail event
//! and delivers the message through the SendGrid v3 API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │ Host outbound event │  ← message the host was about to deliver itself
//! └──────────┬──────────┘
//!            │
//! ┌──────────▼──────────┐
//! │      MailHook       │  ← host contract: skip default / failure text
//! └──────────┬──────────┘
//!            │
//! ┌──────────▼──────────┐
//! │   MailDispatcher    │  ← validate, build payload, classify response
//! └──────────┬──────────┘
//!            │
//! ┌──────────▼──────────┐
//! │   ProviderClient    │  ← SendGrid v3 /mail/send over HTTPS
//! └─────────────────────┘
//! ```
//!
//! Every dispatch is a single synchronous attempt: no queueing,
//! batching, or retry. Provider rejections come back as values the
//! host can render; only host-level misconfiguration is an error.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_mailer::MailHook;
//!
//! let hook = MailHook::from_env()?;
//! let response = hook
//!     .on_outbound_mail(&headers, &recipients, &sender, &subject, &body)
//!     .await?;
//! ```

pub mod credentials;
pub mod dispatch;
pub mod error;
pub mod hooks;
pub mod models;
pub mod providers;

// Re-export commonly used types
pub use credentials::{CredentialSource, EnvCredentialSource};
pub use dispatch::MailDispatcher;
pub use error::{MailerError, MailerResult};
pub use hooks::{HookResponse, MailHook};
pub use models::{DispatchOutcome, SendRequest};
pub use providers::{
    MailPayload, ProviderClient, ProviderFactory, ProviderResponse, SendGridClient, SendGridConfig,
    SendGridFactory,
};
