//! MySQL implementation of the AppRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use sso_core::domain::entities::app::App;
use sso_core::errors::RepositoryError;
use sso_core::repositories::AppRepository;

/// MySQL implementation of the application registry.
pub struct MySqlAppRepository {
    pool: MySqlPool,
}

impl MySqlAppRepository {
    /// Create a new MySQL application repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppRepository for MySqlAppRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<App>, RepositoryError> {
        let query = "SELECT id, name, secret_hash FROM apps WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::storage)?;

        match result {
            Some(row) => Ok(Some(App {
                id: row.try_get("id").map_err(RepositoryError::storage)?,
                name: row.try_get("name").map_err(RepositoryError::storage)?,
                secret_hash: row
                    .try_get("secret_hash")
                    .map_err(RepositoryError::storage)?,
            })),
            None => Ok(None),
        }
    }

    async fn create_app(&self, name: &str, secret_hash: &[u8]) -> Result<i32, RepositoryError> {
        let query = "INSERT INTO apps (name, secret_hash) VALUES (?, ?)";

        let result = sqlx::query(query)
            .bind(name)
            .bind(secret_hash)
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::storage)?;

        Ok(result.last_insert_id() as i32)
    }

    async fn update_app(
        &self,
        id: i32,
        name: &str,
        secret_hash: &[u8],
    ) -> Result<(), RepositoryError> {
        let query = "UPDATE apps SET name = ?, secret_hash = ? WHERE id = ?";

        let result = sqlx::query(query)
            .bind(name)
            .bind(secret_hash)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::storage)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
