//! Log-only email sender for development.

use async_trait::async_trait;
use tracing::info;

use sso_core::services::email::{EmailSender, VerificationEmail};

/// Sender that logs the message instead of delivering it.
///
/// The code itself is not logged; a stray development log must not leak a
/// live reset code.
#[derive(Debug, Clone, Default)]
pub struct LogEmailSender;

impl LogEmailSender {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send_verification(&self, input: VerificationEmail) -> Result<String, String> {
        info!(
            to = %input.to,
            subject = %super::subject(&input),
            "verification email send stub"
        );
        Ok("logged".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_sender_always_succeeds() {
        let sender = LogEmailSender::new();
        let result = sender
            .send_verification(VerificationEmail {
                to: "alice@example.com".to_string(),
                name: "Alice".to_string(),
                code: "483920".to_string(),
            })
            .await;
        assert_eq!(result, Ok("logged".to_string()));
    }
}
