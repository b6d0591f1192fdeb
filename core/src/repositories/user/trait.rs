//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::RepositoryError;

/// Repository trait for User entity persistence operations.
///
/// Implementations own uniqueness enforcement: `create_user` must detect a
/// duplicate email or phone at the storage layer (unique index, not a prior
/// read) so concurrent registrations cannot race past each other.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return the assigned id.
    ///
    /// # Returns
    /// * `Ok(id)` - User created
    /// * `Err(RepositoryError::Duplicate)` - Email or phone already present
    /// * `Err(RepositoryError::Storage)` - Database or other error occurred
    async fn create_user(&self, user: NewUser) -> Result<i64, RepositoryError>;

    /// Find a user whose email OR phone matches the given values.
    ///
    /// Either key may be empty; the lookup matches on whichever is supplied.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user matches either key
    async fn find_by_login(&self, email: &str, phone: &str)
        -> Result<Option<User>, RepositoryError>;

    /// Replace the password hash of the user with the given email.
    ///
    /// # Returns
    /// * `Ok(())` - Hash replaced
    /// * `Err(RepositoryError::NotFound)` - No user with that email
    async fn set_password(&self, email: &str, pass_hash: &[u8]) -> Result<(), RepositoryError>;

    /// Look up the admin flag for a user.
    ///
    /// # Returns
    /// * `Ok(Some(bool))` - The user's admin flag
    /// * `Ok(None)` - No user with that id
    async fn is_admin(&self, user_id: i64) -> Result<Option<bool>, RepositoryError>;
}
