//! Verification code entity for the password-reset workflow.

use constant_time_eq::constant_time_eq;

/// A one-time verification code bound to a user.
///
/// Lifetime is owned entirely by the store the code sits in: a code that can
/// still be read is live, one whose TTL has elapsed reads as absent. At most
/// one live code exists per user; issuing a new one overwrites the previous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode {
    /// The user this code was issued to
    pub user_id: i64,

    /// The code value
    pub code: String,
}

impl VerificationCode {
    pub fn new(user_id: i64, code: impl Into<String>) -> Self {
        Self {
            user_id,
            code: code.into(),
        }
    }

    /// Compare a candidate code against this one in constant time.
    pub fn matches(&self, candidate: &str) -> bool {
        if self.code.len() != candidate.len() {
            return false;
        }
        constant_time_eq(self.code.as_bytes(), candidate.as_bytes())
    }
}
