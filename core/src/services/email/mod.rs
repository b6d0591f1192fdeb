//! Email dispatch trait for verification messages.

use async_trait::async_trait;

/// Input for a password-reset verification email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationEmail {
    /// Recipient address
    pub to: String,
    /// Recipient display name
    pub name: String,
    /// The verification code to include
    pub code: String,
}

/// Trait for verification email delivery.
///
/// Delivery is best-effort from the caller's perspective: the reset code is
/// already durably stored when dispatch happens, so a failed send is logged
/// and the reset flow continues.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send a verification email, returning a provider message id.
    async fn send_verification(&self, input: VerificationEmail) -> Result<String, String>;
}
