//! Startup reconciliation of the configured application identity.

use tracing::{error, info};

use crate::errors::{DomainError, DomainResult};
use crate::repositories::AppRepository;
use crate::services::password::PasswordHasher;

/// Reconcile the configured application identity against the registry.
///
/// Idempotent, run once per process start:
/// - absent app: hash the secret and create the record;
/// - present app: compare name and secret (plaintext against the stored
///   hash), and on any drift rewrite name and secret hash together - this is
///   a rotation, not a merge;
/// - any lookup failure other than "not found" aborts startup.
///
/// After a successful run, durable storage matches process configuration, so
/// a secret rotation needs nothing beyond restarting with the new value.
pub async fn reconcile_app<R: AppRepository>(
    repo: &R,
    hasher: &PasswordHasher,
    id: i32,
    name: &str,
    secret: &str,
) -> DomainResult<()> {
    let existing = repo.find_by_id(id).await.map_err(|e| {
        error!(operation = "bootstrap.reconcile_app", app_id = id, error = %e, "failed to get app");
        DomainError::internal("bootstrap.reconcile_app", e)
    })?;

    match existing {
        Some(app) => {
            let name_changed = app.name != name;
            let secret_changed = !hasher.verify(secret, &app.secret_hash);

            if name_changed || secret_changed {
                let secret_hash = hasher.hash(secret)?;
                repo.update_app(id, name, &secret_hash).await.map_err(|e| {
                    error!(
                        operation = "bootstrap.reconcile_app",
                        app_id = id,
                        error = %e,
                        "failed to update app record"
                    );
                    DomainError::internal("bootstrap.reconcile_app", e)
                })?;

                info!(operation = "bootstrap.reconcile_app", name, "app identity rotated");
            }

            Ok(())
        }
        None => {
            let secret_hash = hasher.hash(secret)?;
            repo.create_app(name, &secret_hash).await.map_err(|e| {
                error!(
                    operation = "bootstrap.reconcile_app",
                    error = %e,
                    "failed to create app record"
                );
                DomainError::internal("bootstrap.reconcile_app", e)
            })?;

            info!(operation = "bootstrap.reconcile_app", name, "app created");
            Ok(())
        }
    }
}
