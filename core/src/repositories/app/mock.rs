//! Mock implementation of AppRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::app::App;
use crate::errors::RepositoryError;

use super::trait_::AppRepository;

/// In-memory application registry for testing
pub struct MockAppRepository {
    apps: Arc<RwLock<HashMap<i32, App>>>,
    next_id: AtomicI32,
    update_count: AtomicUsize,
}

impl MockAppRepository {
    /// Create a new mock registry
    pub fn new() -> Self {
        Self {
            apps: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI32::new(1),
            update_count: AtomicUsize::new(0),
        }
    }

    /// Seed the registry with an existing application
    pub async fn with_app(self, app: App) -> Self {
        self.apps.write().await.insert(app.id, app);
        self
    }

    /// Number of `update_app` calls observed, for idempotency assertions
    pub fn updates(&self) -> usize {
        self.update_count.load(Ordering::SeqCst)
    }
}

impl Default for MockAppRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AppRepository for MockAppRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<App>, RepositoryError> {
        let apps = self.apps.read().await;
        Ok(apps.get(&id).cloned())
    }

    async fn create_app(&self, name: &str, secret_hash: &[u8]) -> Result<i32, RepositoryError> {
        let mut apps = self.apps.write().await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        apps.insert(
            id,
            App {
                id,
                name: name.to_string(),
                secret_hash: secret_hash.to_vec(),
            },
        );
        Ok(id)
    }

    async fn update_app(
        &self,
        id: i32,
        name: &str,
        secret_hash: &[u8],
    ) -> Result<(), RepositoryError> {
        let mut apps = self.apps.write().await;
        match apps.get_mut(&id) {
            Some(app) => {
                app.name = name.to_string();
                app.secret_hash = secret_hash.to_vec();
                self.update_count.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }
}
