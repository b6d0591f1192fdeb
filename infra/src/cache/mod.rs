//! Cache module - Redis client and the verification-code store

mod code_store;
mod redis_client;

pub use code_store::RedisCodeRepository;
pub use redis_client::RedisClient;
