//! Verification-code store configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default lifetime of a password-reset verification code (5 minutes)
const DEFAULT_CODE_TTL_SECS: u64 = 300;

/// Redis configuration for the ephemeral verification-code store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Time-to-live for stored verification codes, in seconds.
    /// The store's own expiry is the sole authority on code lifetime.
    pub code_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            code_ttl_secs: DEFAULT_CODE_TTL_SECS,
        }
    }
}

impl CacheConfig {
    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let url = std::env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());
        let code_ttl_secs = std::env::var("VERIFICATION_CODE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CODE_TTL_SECS);

        Self { url, code_ttl_secs }
    }

    /// Code TTL as a `Duration`
    pub fn code_ttl(&self) -> Duration {
        Duration::from_secs(self.code_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.url, "redis://localhost:6379");
        assert_eq!(config.code_ttl(), Duration::from_secs(300));
    }
}
