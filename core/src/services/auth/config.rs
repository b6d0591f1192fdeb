//! Authentication service configuration

use sso_shared::config::AppConfig;
use std::time::Duration;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Lifetime of issued session tokens
    pub token_ttl: Duration,

    /// Lifetime of password-reset verification codes
    pub code_ttl: Duration,

    /// Length of generated verification codes
    pub code_length: usize,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            token_ttl: Duration::from_secs(3600),
            code_ttl: Duration::from_secs(300),
            code_length: 6,
        }
    }
}

impl From<&AppConfig> for AuthServiceConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            token_ttl: config.token.ttl(),
            code_ttl: config.cache.code_ttl(),
            code_length: config.email.code_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthServiceConfig::default();
        assert_eq!(config.token_ttl, Duration::from_secs(3600));
        assert_eq!(config.code_ttl, Duration::from_secs(300));
        assert_eq!(config.code_length, 6);
    }

    #[test]
    fn test_from_app_config() {
        let mut app_config = AppConfig::default();
        app_config.token.ttl_secs = 120;
        app_config.cache.code_ttl_secs = 30;
        app_config.email.code_length = 8;

        let config = AuthServiceConfig::from(&app_config);
        assert_eq!(config.token_ttl, Duration::from_secs(120));
        assert_eq!(config.code_ttl, Duration::from_secs(30));
        assert_eq!(config.code_length, 8);
    }
}
