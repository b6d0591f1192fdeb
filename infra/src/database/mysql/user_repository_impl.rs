//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::{MySqlPool, Row};

use sso_core::domain::entities::user::{NewUser, User};
use sso_core::errors::RepositoryError;
use sso_core::repositories::UserRepository;

/// MySQL implementation of UserRepository.
///
/// Uniqueness of email and phone is enforced by the unique indexes in the
/// schema; a colliding insert surfaces as a driver-level unique violation,
/// so concurrent registrations cannot race past a prior read.
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, RepositoryError> {
        Ok(User {
            id: row.try_get("id").map_err(RepositoryError::storage)?,
            title: row.try_get("title").map_err(RepositoryError::storage)?,
            birth_date: row
                .try_get("birth_date")
                .map_err(RepositoryError::storage)?,
            name: row.try_get("name").map_err(RepositoryError::storage)?,
            last_name: row
                .try_get("last_name")
                .map_err(RepositoryError::storage)?,
            email: row.try_get("email").map_err(RepositoryError::storage)?,
            pass_hash: row
                .try_get("pass_hash")
                .map_err(RepositoryError::storage)?,
            phone: row.try_get("phone").map_err(RepositoryError::storage)?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create_user(&self, user: NewUser) -> Result<i64, RepositoryError> {
        let query = r#"
            INSERT INTO users (title, birth_date, name, last_name, email, pass_hash, phone)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&user.title)
            .bind(&user.birth_date)
            .bind(&user.name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(&user.pass_hash)
            .bind(&user.phone)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                let unique_violation = e
                    .as_database_error()
                    .map(|db_err| db_err.kind() == ErrorKind::UniqueViolation)
                    .unwrap_or(false);
                if unique_violation {
                    RepositoryError::Duplicate
                } else {
                    RepositoryError::storage(e)
                }
            })?;

        Ok(result.last_insert_id() as i64)
    }

    async fn find_by_login(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<Option<User>, RepositoryError> {
        let query = r#"
            SELECT id, title, birth_date, name, last_name, email, pass_hash, phone
            FROM users
            WHERE email = ? OR phone = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .bind(phone)
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::storage)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn set_password(&self, email: &str, pass_hash: &[u8]) -> Result<(), RepositoryError> {
        let query = "UPDATE users SET pass_hash = ? WHERE email = ?";

        let result = sqlx::query(query)
            .bind(pass_hash)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::storage)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn is_admin(&self, user_id: i64) -> Result<Option<bool>, RepositoryError> {
        let query = "SELECT is_admin FROM users WHERE id = ?";

        let result = sqlx::query(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::storage)?;

        match result {
            Some(row) => {
                let is_admin: bool = row.try_get("is_admin").map_err(RepositoryError::storage)?;
                Ok(Some(is_admin))
            }
            None => Ok(None),
        }
    }
}
