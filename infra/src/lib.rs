//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborator contracts defined in
//! `sso_core`:
//! - **database**: MySQL repositories for users and the application registry,
//!   using SQLx
//! - **cache**: Redis-backed verification-code store with native TTL expiry
//! - **email**: verification email dispatchers (HTTP relay and log-only)

pub mod cache;
pub mod database;
pub mod email;

pub use cache::{RedisClient, RedisCodeRepository};
pub use database::{connect, MySqlAppRepository, MySqlUserRepository};
pub use email::{LogEmailSender, RelayEmailSender};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
