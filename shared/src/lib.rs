//! Shared configuration and telemetry for the SSO server
//!
//! This crate provides the pieces used by every other server module:
//! - Environment-driven configuration types
//! - Tracing subscriber initialization

pub mod config;
pub mod telemetry;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AppIdentityConfig, CacheConfig, DatabaseConfig, EmailConfig, Environment,
    TokenConfig,
};
pub use telemetry::init_tracing;
