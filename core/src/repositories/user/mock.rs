//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::RepositoryError;

use super::trait_::UserRepository;

/// In-memory user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<Vec<User>>>,
    admins: Arc<RwLock<HashSet<i64>>>,
    next_id: AtomicI64,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
            admins: Arc::new(RwLock::new(HashSet::new())),
            next_id: AtomicI64::new(1),
        }
    }

    /// Mark a user as admin
    pub async fn grant_admin(&self, user_id: i64) {
        self.admins.write().await.insert(user_id);
    }

    /// Number of stored users
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create_user(&self, user: NewUser) -> Result<i64, RepositoryError> {
        let mut users = self.users.write().await;

        // Same uniqueness rule as the real schema: email and phone each
        // carry a unique index.
        if users
            .iter()
            .any(|u| u.email == user.email || u.phone == user.phone)
        {
            return Err(RepositoryError::Duplicate);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        users.push(user.into_user(id));
        Ok(id)
    }

    async fn find_by_login(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| {
                (!email.is_empty() && u.email == email) || (!phone.is_empty() && u.phone == phone)
            })
            .cloned())
    }

    async fn set_password(&self, email: &str, pass_hash: &[u8]) -> Result<(), RepositoryError> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.email == email) {
            Some(user) => {
                user.pass_hash = pass_hash.to_vec();
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn is_admin(&self, user_id: i64) -> Result<Option<bool>, RepositoryError> {
        let users = self.users.read().await;
        if !users.iter().any(|u| u.id == user_id) {
            return Ok(None);
        }
        Ok(Some(self.admins.read().await.contains(&user_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str, phone: &str) -> NewUser {
        NewUser {
            title: "Mx".to_string(),
            birth_date: "2000-01-01".to_string(),
            name: "Test".to_string(),
            last_name: "User".to_string(),
            email: email.to_string(),
            pass_hash: vec![0u8; 8],
            phone: phone.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_by_either_key() {
        let repo = MockUserRepository::new();
        let id = repo
            .create_user(new_user("a@example.com", "+111"))
            .await
            .unwrap();

        let by_email = repo.find_by_login("a@example.com", "").await.unwrap();
        assert_eq!(by_email.map(|u| u.id), Some(id));

        let by_phone = repo.find_by_login("", "+111").await.unwrap();
        assert_eq!(by_phone.map(|u| u.id), Some(id));
    }

    #[tokio::test]
    async fn test_duplicate_email_or_phone_rejected() {
        let repo = MockUserRepository::new();
        repo.create_user(new_user("a@example.com", "+111"))
            .await
            .unwrap();

        let same_email = repo.create_user(new_user("a@example.com", "+222")).await;
        assert!(matches!(same_email, Err(RepositoryError::Duplicate)));

        let same_phone = repo.create_user(new_user("b@example.com", "+111")).await;
        assert!(matches!(same_phone, Err(RepositoryError::Duplicate)));
        assert_eq!(repo.user_count().await, 1);
    }

    #[tokio::test]
    async fn test_set_password_unknown_email() {
        let repo = MockUserRepository::new();
        let result = repo.set_password("ghost@example.com", &[1, 2]).await;
        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_is_admin_flag() {
        let repo = MockUserRepository::new();
        let id = repo
            .create_user(new_user("a@example.com", "+111"))
            .await
            .unwrap();

        assert_eq!(repo.is_admin(id).await.unwrap(), Some(false));
        repo.grant_admin(id).await;
        assert_eq!(repo.is_admin(id).await.unwrap(), Some(true));
        assert_eq!(repo.is_admin(9999).await.unwrap(), None);
    }
}
