//! Key-value backend implementations.
//!
//! - [`RedisStore`] - Redis-backed [`crate::domain::repositories::KeyValueStore`]

mod redis_store;

pub use redis_store::RedisStore;
