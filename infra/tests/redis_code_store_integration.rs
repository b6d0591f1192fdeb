//! Integration tests for the Redis verification-code store
//!
//! Run with: cargo test --test redis_code_store_integration -- --ignored

use std::time::Duration;

use sso_core::repositories::CodeRepository;
use sso_infra::cache::{RedisClient, RedisCodeRepository};
use sso_shared::config::CacheConfig;

async fn code_store() -> RedisCodeRepository {
    let url =
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());
    let client = RedisClient::new(&CacheConfig::new(url))
        .await
        .expect("Failed to create Redis client");
    RedisCodeRepository::new(client)
}

#[tokio::test]
#[ignore] // Requires Redis to be running
async fn test_save_and_find_code() {
    let store = code_store().await;

    store
        .save_code(900001, "123456", Duration::from_secs(60))
        .await
        .unwrap();

    let code = store.find_code(900001).await.unwrap().unwrap();
    assert_eq!(code.code, "123456");
    assert_eq!(code.user_id, 900001);

    store.delete_code(900001).await.unwrap();
}

#[tokio::test]
#[ignore] // Requires Redis to be running
async fn test_second_save_overwrites_first() {
    let store = code_store().await;

    store
        .save_code(900002, "111111", Duration::from_secs(60))
        .await
        .unwrap();
    store
        .save_code(900002, "222222", Duration::from_secs(60))
        .await
        .unwrap();

    let code = store.find_code(900002).await.unwrap().unwrap();
    assert_eq!(code.code, "222222");

    store.delete_code(900002).await.unwrap();
}

#[tokio::test]
#[ignore] // Requires Redis to be running
async fn test_expired_code_reads_as_absent() {
    let store = code_store().await;

    store
        .save_code(900003, "123456", Duration::from_secs(1))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(1500)).await;

    assert!(store.find_code(900003).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires Redis to be running
async fn test_delete_makes_code_absent() {
    let store = code_store().await;

    store
        .save_code(900004, "123456", Duration::from_secs(60))
        .await
        .unwrap();
    store.delete_code(900004).await.unwrap();

    assert!(store.find_code(900004).await.unwrap().is_none());
}
