//! Token issuance and application identity configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default session token lifetime (1 hour)
const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

/// Session token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Token lifetime in seconds
    pub ttl_secs: u64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

impl TokenConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let ttl_secs = std::env::var("TOKEN_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_SECS);

        Self { ttl_secs }
    }

    /// Token lifetime as a `Duration`
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

/// Identity of the client application this process serves.
///
/// The secret is the plaintext value handed to the process at startup. It is
/// reconciled into the application registry as a bcrypt hash and doubles as
/// the token signing key material; it must never be persisted in plaintext.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppIdentityConfig {
    /// Numeric application identifier
    pub id: i32,

    /// Human-readable application name
    pub name: String,

    /// Shared application secret
    pub secret: String,
}

impl Default for AppIdentityConfig {
    fn default() -> Self {
        Self {
            id: 1,
            name: String::from("sso-app"),
            secret: String::from("dev-secret-change-in-production"),
        }
    }
}

impl AppIdentityConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let id = std::env::var("APP_ID")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.id);
        let name = std::env::var("APP_NAME").unwrap_or(defaults.name);
        let secret = std::env::var("APP_SECRET").unwrap_or(defaults.secret);

        Self { id, name, secret }
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == Self::default().secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_config_default() {
        let config = TokenConfig::default();
        assert_eq!(config.ttl(), Duration::from_secs(3600));
    }

    #[test]
    fn test_default_secret_detection() {
        let config = AppIdentityConfig::default();
        assert!(config.is_using_default_secret());

        let config = AppIdentityConfig {
            secret: "rotated".to_string(),
            ..Default::default()
        };
        assert!(!config.is_using_default_secret());
    }
}
