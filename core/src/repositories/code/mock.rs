//! Mock implementation of CodeRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::RepositoryError;

use super::trait_::CodeRepository;

/// In-memory verification-code store for testing.
///
/// No background sweeper: each entry carries its expiry instant and reads
/// treat an elapsed expiry as absence, matching the contract of a store with
/// native TTL support.
pub struct MockCodeRepository {
    codes: Arc<RwLock<HashMap<i64, (String, Instant)>>>,
}

impl MockCodeRepository {
    /// Create a new mock store
    pub fn new() -> Self {
        Self {
            codes: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockCodeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeRepository for MockCodeRepository {
    async fn save_code(
        &self,
        user_id: i64,
        code: &str,
        ttl: Duration,
    ) -> Result<(), RepositoryError> {
        let mut codes = self.codes.write().await;
        codes.insert(user_id, (code.to_string(), Instant::now() + ttl));
        Ok(())
    }

    async fn find_code(&self, user_id: i64) -> Result<Option<VerificationCode>, RepositoryError> {
        let codes = self.codes.read().await;
        Ok(codes.get(&user_id).and_then(|(code, expires_at)| {
            if Instant::now() < *expires_at {
                Some(VerificationCode::new(user_id, code.clone()))
            } else {
                None
            }
        }))
    }

    async fn delete_code(&self, user_id: i64) -> Result<(), RepositoryError> {
        self.codes.write().await.remove(&user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_then_find() {
        let repo = MockCodeRepository::new();
        repo.save_code(1, "123456", Duration::from_secs(60))
            .await
            .unwrap();

        let code = repo.find_code(1).await.unwrap().unwrap();
        assert_eq!(code.code, "123456");
        assert_eq!(code.user_id, 1);
    }

    #[tokio::test]
    async fn test_expired_code_reads_as_absent() {
        let repo = MockCodeRepository::new();
        repo.save_code(1, "123456", Duration::from_secs(0))
            .await
            .unwrap();

        assert!(repo.find_code(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_code() {
        let repo = MockCodeRepository::new();
        repo.save_code(1, "111111", Duration::from_secs(60))
            .await
            .unwrap();
        repo.save_code(1, "222222", Duration::from_secs(60))
            .await
            .unwrap();

        let code = repo.find_code(1).await.unwrap().unwrap();
        assert_eq!(code.code, "222222");
    }

    #[tokio::test]
    async fn test_delete_code() {
        let repo = MockCodeRepository::new();
        repo.save_code(1, "123456", Duration::from_secs(60))
            .await
            .unwrap();
        repo.delete_code(1).await.unwrap();

        assert!(repo.find_code(1).await.unwrap().is_none());
    }
}
