//! Configuration module with business-specific sub-modules
//!
//! Configuration is organized by concern:
//! - `auth` - Token issuance and the bootstrapped application identity
//! - `cache` - Verification-code store (Redis) configuration
//! - `database` - Database connection and pool configuration
//! - `email` - Verification email dispatch configuration
//! - `environment` - Environment detection

pub mod auth;
pub mod cache;
pub mod database;
pub mod email;
pub mod environment;

// Re-export commonly used types
pub use auth::{AppIdentityConfig, TokenConfig};
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use environment::Environment;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Environment the process runs in
    pub environment: Environment,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Verification-code store configuration
    pub cache: CacheConfig,

    /// Token issuance configuration
    pub token: TokenConfig,

    /// Application identity reconciled at startup
    pub app_identity: AppIdentityConfig,

    /// Email dispatch configuration
    pub email: EmailConfig,
}

impl AppConfig {
    /// Load the full configuration from the process environment.
    ///
    /// Reads `.env` first so local development picks up overrides without
    /// exporting variables by hand.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            environment: Environment::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            token: TokenConfig::from_env(),
            app_identity: AppIdentityConfig::from_env(),
            email: EmailConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            token: TokenConfig::default(),
            app_identity: AppIdentityConfig::default(),
            email: EmailConfig::default(),
        }
    }
}
