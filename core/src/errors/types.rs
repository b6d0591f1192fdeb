//! Error type definitions for authentication, token issuance, and storage.

use thiserror::Error;

/// Authentication-related errors
///
/// The caller-visible failure kinds of the public operations. Wrong password,
/// unknown user, and wrong or expired reset code all collapse into
/// `InvalidCredentials` so callers cannot enumerate accounts or probe code
/// liveness.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid app id")]
    InvalidAppId,

    #[error("user already exists")]
    UserExists,

    #[error("user not found")]
    UserNotFound,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("token generation failed")]
    TokenGenerationFailed,
}

/// Errors surfaced by repository implementations.
///
/// These never reach callers of the authentication service directly; the
/// service translates them into [`AuthError`] or an internal error at its
/// boundary.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The addressed record does not exist (or, for TTL-governed stores,
    /// no longer exists)
    #[error("record not found")]
    NotFound,

    /// An insert collided with an existing unique key
    #[error("record already exists")]
    Duplicate,

    /// Any other storage failure
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl RepositoryError {
    pub fn storage(source: impl std::fmt::Display) -> Self {
        RepositoryError::Storage {
            message: source.to_string(),
        }
    }
}
