//! Redis-backed key-value store.

use crate::domain::repositories::{KeyValueStore, StoreError, StoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError, aio::ConnectionManager};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Redis implementation of [`KeyValueStore`].
///
/// Holds a `ConnectionManager`, which multiplexes commands over one
/// connection and reconnects on failure. Cloning is cheap and every clone
/// shares the connection. Each command is bounded by `command_timeout`.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
    command_timeout: Duration,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379/0"`)
    /// - `command_timeout` - deadline applied to the connect, the PING and
    ///   every later command; controlled via `REDIS_COMMAND_TIMEOUT_MS`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid or the server
    /// cannot be reached, and [`StoreError::Timeout`] if it does not answer
    /// within the deadline.
    pub async fn connect(redis_url: &str, command_timeout: Duration) -> StoreResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let conn = tokio::time::timeout(command_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| StoreError::Timeout(command_timeout))?
            .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let store = Self {
            conn,
            command_timeout,
        };
        store.ping().await?;

        info!("Connected to Redis");
        Ok(store)
    }

    async fn bounded<T, F>(&self, fut: F) -> StoreResult<T>
    where
        F: Future<Output = Result<T, RedisError>>,
    {
        match tokio::time::timeout(self.command_timeout, fut).await {
            Ok(result) => result.map_err(map_redis_error),
            Err(_) => {
                warn!(timeout = ?self.command_timeout, "Redis command timed out");
                Err(StoreError::Timeout(self.command_timeout))
            }
        }
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn increment(&self, key: &str) -> StoreResult<u64> {
        let mut conn = self.conn.clone();
        let value: i64 = self.bounded(conn.incr(key, 1i64)).await?;
        debug!(key, value, "INCR");

        u64::try_from(value)
            .map_err(|_| StoreError::InvalidValue(format!("counter {key} is negative: {value}")))
    }

    async fn get_string(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = self.bounded(conn.get(key)).await?;
        debug!(key, hit = value.is_some(), "GET");
        Ok(value)
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<()> {
        let seconds = ttl.as_secs();
        if seconds == 0 {
            return Err(StoreError::InvalidValue(format!(
                "TTL for {key} must be at least one second, got {ttl:?}"
            )));
        }

        let mut conn = self.conn.clone();
        self.bounded(conn.set_ex::<_, _, ()>(key, value, seconds))
            .await?;
        debug!(key, ttl_seconds = seconds, "SET EX");
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        self.bounded(conn.ping::<()>()).await
    }
}

fn map_redis_error(e: RedisError) -> StoreError {
    if e.is_timeout() {
        StoreError::Operation(format!("Redis timeout: {}", e))
    } else if e.is_io_error() || e.is_connection_dropped() || e.is_connection_refusal() {
        StoreError::Connection(e.to_string())
    } else {
        StoreError::Operation(e.to_string())
    }
}
