//! Verification email dispatch configuration

use serde::{Deserialize, Serialize};

/// Default length of generated verification codes
const DEFAULT_CODE_LENGTH: usize = 6;

/// Email relay configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// HTTP mail-relay endpoint; when unset, delivery falls back to logging
    pub relay_url: Option<String>,

    /// Bearer token for the mail relay
    pub relay_token: Option<String>,

    /// Sender address placed on outgoing mail
    pub from: String,

    /// Length of generated verification codes
    pub code_length: usize,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            relay_url: None,
            relay_token: None,
            from: String::from("no-reply@localhost"),
            code_length: DEFAULT_CODE_LENGTH,
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let relay_url = std::env::var("EMAIL_RELAY_URL").ok();
        let relay_token = std::env::var("EMAIL_RELAY_TOKEN").ok();
        let from =
            std::env::var("EMAIL_FROM").unwrap_or_else(|_| "no-reply@localhost".to_string());
        let code_length = std::env::var("VERIFICATION_CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CODE_LENGTH);

        Self {
            relay_url,
            relay_token,
            from,
            code_length,
        }
    }
}
