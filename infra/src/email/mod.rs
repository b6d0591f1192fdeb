//! Email dispatch implementations.
//!
//! Two senders implement the core's `EmailSender` contract:
//! - [`RelayEmailSender`] posts messages to an HTTP mail relay
//! - [`LogEmailSender`] logs them and reports success, for development
//!
//! Message content is plain text built from the recipient name and code.

mod log;
mod relay;

pub use log::LogEmailSender;
pub use relay::RelayEmailSender;

use sso_core::services::email::VerificationEmail;

/// Subject line for a verification email.
fn subject(input: &VerificationEmail) -> String {
    format!("Your password reset code, {}", input.name)
}

/// Plain-text body for a verification email.
fn body(input: &VerificationEmail) -> String {
    format!(
        "Hello {},\n\nYour verification code is {}.\n\nIf you did not request a password reset, you can ignore this message.\n",
        input.name, input.code
    )
}
