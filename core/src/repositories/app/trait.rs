//! Application registry trait.

use async_trait::async_trait;

use crate::domain::entities::app::App;
use crate::errors::RepositoryError;

/// Repository trait for the application registry.
///
/// Written to only by the startup bootstrap, read by login to validate the
/// requested application id.
#[async_trait]
pub trait AppRepository: Send + Sync {
    /// Find an application by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<App>, RepositoryError>;

    /// Register a new application and return the assigned id.
    async fn create_app(&self, name: &str, secret_hash: &[u8]) -> Result<i32, RepositoryError>;

    /// Overwrite an application's name and secret hash together.
    ///
    /// # Returns
    /// * `Ok(())` - Record rewritten
    /// * `Err(RepositoryError::NotFound)` - No application with that id
    async fn update_app(
        &self,
        id: i32,
        name: &str,
        secret_hash: &[u8],
    ) -> Result<(), RepositoryError>;
}
