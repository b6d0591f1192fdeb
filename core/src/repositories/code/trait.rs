//! Ephemeral verification-code store trait.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::RepositoryError;

/// Store for one-time verification codes with TTL-governed lifetime.
///
/// The store's expiry mechanism is the sole authority on code lifetime: an
/// expired code must read as absent, indistinguishable from one that was
/// never issued. Implementations without native TTL support must attach an
/// explicit expiry timestamp and check it on every read.
#[async_trait]
pub trait CodeRepository: Send + Sync {
    /// Store a code for a user, replacing any previously outstanding code.
    ///
    /// The write must be atomic (single set-with-TTL); when two saves race
    /// for the same user, exactly one code survives.
    async fn save_code(
        &self,
        user_id: i64,
        code: &str,
        ttl: Duration,
    ) -> Result<(), RepositoryError>;

    /// Fetch the live code for a user.
    ///
    /// # Returns
    /// * `Ok(Some(code))` - A code exists and its TTL has not elapsed
    /// * `Ok(None)` - Never issued, deleted, or expired
    async fn find_code(&self, user_id: i64) -> Result<Option<VerificationCode>, RepositoryError>;

    /// Drop the code for a user, if any. Used after a successful
    /// confirmation so a consumed code cannot be replayed.
    async fn delete_code(&self, user_id: i64) -> Result<(), RepositoryError>;
}
