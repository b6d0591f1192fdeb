//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, RepositoryError, TokenError};

use thiserror::Error;

/// Service-level errors surfaced to callers of the authentication core.
///
/// Every public operation resolves to either one of the enumerated
/// [`AuthError`] kinds or an opaque `Internal` error. Collaborator-specific
/// failures (storage, signing, hashing) never cross this boundary in their
/// original form; they are logged with operation context and collapsed to
/// `Internal`.
#[derive(Error, Debug)]
pub enum DomainError {
    // Bridge to the caller-visible authentication taxonomy
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Collapse a collaborator failure into an opaque internal error,
    /// keeping the operation name for the log trail.
    pub fn internal(operation: &str, source: impl std::fmt::Display) -> Self {
        DomainError::Internal {
            message: format!("{}: {}", operation, source),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_bridges_transparently() {
        let err: DomainError = AuthError::InvalidCredentials.into();
        assert_eq!(err.to_string(), "invalid credentials");
    }

    #[test]
    fn test_internal_error_keeps_operation_context() {
        let err = DomainError::internal("auth.login", "connection refused");
        assert_eq!(
            err.to_string(),
            "Internal error: auth.login: connection refused"
        );
    }
}
