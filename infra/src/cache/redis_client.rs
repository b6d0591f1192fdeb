//! Redis cache client

use redis::{aio::MultiplexedConnection, AsyncCommands, Client};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use sso_shared::config::CacheConfig;

use crate::InfrastructureError;

/// Connection attempts before giving up on Redis at startup
const MAX_CONNECT_RETRIES: u32 = 3;

/// Base delay between connection attempts (doubled each retry)
const CONNECT_RETRY_DELAY_MS: u64 = 100;

/// Thin async Redis client for the verification-code store.
///
/// Holds a multiplexed connection; cloning is cheap and every clone shares
/// the underlying connection.
#[derive(Clone)]
pub struct RedisClient {
    connection: MultiplexedConnection,
}

impl RedisClient {
    /// Connect to Redis, retrying with exponential backoff.
    pub async fn new(config: &CacheConfig) -> Result<Self, InfrastructureError> {
        let client = Client::open(config.url.as_str())
            .map_err(|e| InfrastructureError::Config(format!("invalid Redis URL: {}", e)))?;

        let mut attempts = 0;
        let mut delay = CONNECT_RETRY_DELAY_MS;

        let connection = loop {
            attempts += 1;
            match client.get_multiplexed_async_connection().await {
                Ok(connection) => break connection,
                Err(e) if attempts < MAX_CONNECT_RETRIES => {
                    warn!(
                        attempt = attempts,
                        error = %e,
                        "failed to connect to Redis, retrying in {}ms",
                        delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    delay = (delay * 2).min(5000);
                }
                Err(e) => return Err(InfrastructureError::Cache(e)),
            }
        };

        info!("connected to Redis");

        Ok(Self { connection })
    }

    /// Set a value with an expiry, as one atomic command.
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        debug!(key, expiry_seconds, "setting key");
        let mut conn = self.connection.clone();
        conn.set_ex::<_, _, ()>(key, value, expiry_seconds).await?;
        Ok(())
    }

    /// Get a value; `None` covers both "never set" and "expired".
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    /// Delete a key, reporting whether it existed.
    pub async fn delete(&self, key: &str) -> Result<bool, InfrastructureError> {
        let mut conn = self.connection.clone();
        let deleted: u32 = conn.del(key).await?;
        Ok(deleted > 0)
    }
}
