//! HTTP mail-relay email sender.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use sso_core::services::email::{EmailSender, VerificationEmail};
use sso_shared::config::EmailConfig;

use crate::InfrastructureError;

/// Request timeout for relay calls
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Serialize)]
struct RelayMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: String,
    text: String,
}

#[derive(Deserialize)]
struct RelayResponse {
    id: String,
}

/// Sender that posts messages to an HTTP mail relay as JSON.
pub struct RelayEmailSender {
    client: reqwest::Client,
    relay_url: String,
    relay_token: Option<String>,
    from: String,
}

impl RelayEmailSender {
    /// Create a relay sender from email configuration.
    ///
    /// Fails when no relay endpoint is configured; deployments without one
    /// should fall back to [`LogEmailSender`](super::LogEmailSender).
    pub fn new(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        let relay_url = config
            .relay_url
            .clone()
            .ok_or_else(|| InfrastructureError::Config("EMAIL_RELAY_URL not set".to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            relay_url,
            relay_token: config.relay_token.clone(),
            from: config.from.clone(),
        })
    }
}

#[async_trait]
impl EmailSender for RelayEmailSender {
    async fn send_verification(&self, input: VerificationEmail) -> Result<String, String> {
        let message = RelayMessage {
            from: &self.from,
            to: &input.to,
            subject: super::subject(&input),
            text: super::body(&input),
        };

        let mut request = self.client.post(&self.relay_url).json(&message);
        if let Some(token) = &self.relay_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| format!("mail relay request failed: {}", e))?;

        let message_id = response
            .json::<RelayResponse>()
            .await
            .map(|r| r.id)
            .unwrap_or_else(|_| "accepted".to_string());

        debug!(to = %input.to, message_id = %message_id, "verification email relayed");

        Ok(message_id)
    }
}
