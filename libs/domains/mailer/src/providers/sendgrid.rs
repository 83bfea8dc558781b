//! SendGrid v3 transport: wire payload, client, and factory.

use super::{ProviderClient, ProviderFactory, ProviderResponse};
use crate::error::MailerResult;
use async_trait::async_trait;
use core_config::{ConfigError, FromEnv, or_default};
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

/// Production API base URL.
pub const SENDGRID_API_URL: &str = "https://api.sendgrid.com/v3";

const SENDGRID_API_URL_VAR: &str = "SENDGRID_API_URL";

/// SendGrid API configuration.
///
/// The API key is not part of the configuration: it comes from the
/// credential source on every send.
#[derive(Debug, Clone)]
pub struct SendGridConfig {
    /// API base URL, overridable for test servers.
    pub api_url: String,
}

impl Default for SendGridConfig {
    fn default() -> Self {
        Self {
            api_url: SENDGRID_API_URL.to_string(),
        }
    }
}

impl FromEnv for SendGridConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: or_default(SENDGRID_API_URL_VAR, SENDGRID_API_URL),
        })
    }
}

// SendGrid v3 mail-send request structures

/// SendGrid-native request body: one sender, one recipient, one
/// plain-text content block. Built fresh per request and immutable
/// once built.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MailPayload {
    personalizations: Vec<Personalization>,
    from: EmailAddress,
    subject: String,
    content: Vec<Content>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
struct Personalization {
    to: Vec<EmailAddress>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
struct EmailAddress {
    email: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
struct Content {
    #[serde(rename = "type")]
    content_type: String,
    value: String,
}

impl MailPayload {
    /// Build the payload verbatim from the host's message parts.
    pub fn new(from: &str, to: &str, subject: &str, body: &str) -> Self {
        Self {
            personalizations: vec![Personalization {
                to: vec![EmailAddress {
                    email: to.to_string(),
                }],
            }],
            from: EmailAddress {
                email: from.to_string(),
            },
            subject: subject.to_string(),
            content: vec![Content {
                content_type: "text/plain".to_string(),
                value: body.to_string(),
            }],
        }
    }

    /// Sender address.
    pub fn from_email(&self) -> &str {
        &self.from.email
    }

    /// The sole recipient address.
    pub fn to_email(&self) -> &str {
        &self.personalizations[0].to[0].email
    }

    /// Subject line.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Plain-text body.
    pub fn body(&self) -> &str {
        &self.content[0].value
    }

    /// MIME type of the sole content block.
    pub fn content_type(&self) -> &str {
        &self.content[0].content_type
    }
}

/// SendGrid client bound to one API key.
pub struct SendGridClient {
    api_url: String,
    api_key: String,
    http: Client,
}

impl SendGridClient {
    /// Create a client with its own connection pool.
    pub fn new(config: &SendGridConfig, api_key: String) -> Self {
        Self::with_http(config, api_key, Client::new())
    }

    fn with_http(config: &SendGridConfig, api_key: String, http: Client) -> Self {
        Self {
            api_url: config.api_url.clone(),
            api_key,
            http,
        }
    }
}

#[async_trait]
impl ProviderClient for SendGridClient {
    async fn send(&self, payload: &MailPayload) -> MailerResult<ProviderResponse> {
        debug!(
            to = %payload.to_email(),
            subject = %payload.subject(),
            "Posting mail to SendGrid"
        );

        let response = self
            .http
            .post(format!("{}/mail/send", self.api_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        Ok(ProviderResponse { status, body })
    }
}

/// Production factory: shares one HTTP connection pool across sends
/// and binds each client to the per-send credential.
pub struct SendGridFactory {
    config: SendGridConfig,
    http: Client,
}

impl SendGridFactory {
    /// Create a factory for the given configuration.
    pub fn new(config: SendGridConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

impl ProviderFactory for SendGridFactory {
    fn client(&self, api_key: &str) -> Box<dyn ProviderClient> {
        Box::new(SendGridClient::with_http(
            &self.config,
            api_key.to_string(),
            self.http.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_to_production_url() {
        let config = SendGridConfig::default();
        assert_eq!(config.api_url, "https://api.sendgrid.com/v3");
    }

    #[test]
    fn test_config_from_env_override() {
        temp_env::with_var(SENDGRID_API_URL_VAR, Some("http://localhost:9100"), || {
            let config = SendGridConfig::from_env().unwrap();
            assert_eq!(config.api_url, "http://localhost:9100");
        });
    }

    #[test]
    fn test_config_from_env_default() {
        temp_env::with_var_unset(SENDGRID_API_URL_VAR, || {
            let config = SendGridConfig::from_env().unwrap();
            assert_eq!(config.api_url, SENDGRID_API_URL);
        });
    }

    #[test]
    fn test_payload_echoes_message_parts() {
        let payload = MailPayload::new(
            "s@example.com",
            "r@example.com",
            "Some subject",
            "Email body",
        );

        assert_eq!(payload.from_email(), "s@example.com");
        assert_eq!(payload.to_email(), "r@example.com");
        assert_eq!(payload.subject(), "Some subject");
        assert_eq!(payload.body(), "Email body");
        assert_eq!(payload.content_type(), "text/plain");
    }

    #[test]
    fn test_payload_wire_shape() {
        let payload = MailPayload::new("s@example.com", "r@example.com", "Hi", "Body");
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value["personalizations"][0]["to"][0]["email"],
            "r@example.com"
        );
        assert_eq!(value["from"]["email"], "s@example.com");
        assert_eq!(value["subject"], "Hi");
        assert_eq!(value["content"][0]["type"], "text/plain");
        assert_eq!(value["content"][0]["value"], "Body");
        // Exactly one recipient and one content block on the wire.
        assert_eq!(value["personalizations"].as_array().unwrap().len(), 1);
        assert_eq!(value["content"].as_array().unwrap().len(), 1);
    }
}
