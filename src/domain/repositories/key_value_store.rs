//! Key-value backend contract.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Failures reaching or talking to the key-value backend.
///
/// Every variant means the backend is unavailable for this call. An absent
/// key is not an error; see [`KeyValueStore::get_string`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),

    #[error("store call timed out after {0:?}")]
    Timeout(Duration),

    #[error("store operation error: {0}")]
    Operation(String),

    #[error("store returned an unexpected value: {0}")]
    InvalidValue(String),
}

/// Result type for backend operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Networked key-value store providing the primitives the link engine needs.
///
/// Implementations are shared across all request tasks and must be safe for
/// concurrent use without external locking. Any per-call deadline is the
/// implementation's responsibility; callers never retry.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis over a multiplexed connection
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Atomically adds 1 to the integer at `key` and returns the new value.
    ///
    /// An absent key counts as 0, so the first call returns 1. No two
    /// callers, in any process, ever observe the same returned value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend is unreachable or the stored
    /// value is not an integer.
    async fn increment(&self, key: &str) -> StoreResult<u64>;

    /// Reads the string stored at `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if the key exists
    /// - `Ok(None)` if the key is absent or expired
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] only when the backend itself fails.
    async fn get_string(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` at `key`, replacing any prior value, expiring after `ttl`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write could not be confirmed.
    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<()>;

    /// Checks that the backend answers.
    ///
    /// Used at startup and by the health endpoint.
    async fn ping(&self) -> StoreResult<()>;
}
