//! Redis-backed verification-code store.
//!
//! One key per user, `password_reset:code:{user_id}`, written with
//! `SET ... EX` so the value and its TTL land atomically. Redis expiry is
//! the sole authority on code lifetime: an expired key reads as nil, which
//! the core treats identically to a code that was never issued. A second
//! save for the same user overwrites the previous code (last write wins).

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use sso_core::domain::entities::verification_code::VerificationCode;
use sso_core::errors::RepositoryError;
use sso_core::repositories::CodeRepository;

use super::redis_client::RedisClient;

/// Redis implementation of the verification-code store
#[derive(Clone)]
pub struct RedisCodeRepository {
    client: RedisClient,
}

impl RedisCodeRepository {
    /// Create a new Redis code store
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn code_key(user_id: i64) -> String {
        format!("password_reset:code:{}", user_id)
    }
}

#[async_trait]
impl CodeRepository for RedisCodeRepository {
    async fn save_code(
        &self,
        user_id: i64,
        code: &str,
        ttl: Duration,
    ) -> Result<(), RepositoryError> {
        let key = Self::code_key(user_id);

        // Redis rejects a zero expiry; a code with no lifetime is simply
        // absent, which deleting the key expresses exactly.
        if ttl.as_secs() == 0 {
            self.client
                .delete(&key)
                .await
                .map_err(RepositoryError::storage)?;
            return Ok(());
        }

        debug!(user_id, "storing verification code");
        self.client
            .set_with_expiry(&key, code, ttl.as_secs())
            .await
            .map_err(RepositoryError::storage)
    }

    async fn find_code(&self, user_id: i64) -> Result<Option<VerificationCode>, RepositoryError> {
        let value = self
            .client
            .get(&Self::code_key(user_id))
            .await
            .map_err(RepositoryError::storage)?;

        Ok(value.map(|code| VerificationCode::new(user_id, code)))
    }

    async fn delete_code(&self, user_id: i64) -> Result<(), RepositoryError> {
        self.client
            .delete(&Self::code_key(user_id))
            .await
            .map_err(RepositoryError::storage)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_key_per_user() {
        assert_eq!(
            RedisCodeRepository::code_key(42),
            "password_reset:code:42"
        );
        assert_ne!(
            RedisCodeRepository::code_key(1),
            RedisCodeRepository::code_key(2)
        );
    }
}
