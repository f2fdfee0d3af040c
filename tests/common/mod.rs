#![allow(dead_code)]

use async_trait::async_trait;
use redis_shortener::domain::repositories::{KeyValueStore, StoreError, StoreResult};
use redis_shortener::state::AppState;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

/// In-process stand-in for Redis.
///
/// Expiry uses the tokio clock, so tests running with a paused clock can
/// advance past a TTL with `tokio::time::advance`.
#[derive(Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, (String, Option<Instant>)>>,
    unavailable: AtomicBool,
    fail_gets: AtomicBool,
    pub set_calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Makes every subsequent call fail as if the backend were down.
    pub fn set_unavailable(&self, down: bool) {
        self.unavailable.store(down, Ordering::SeqCst);
    }

    /// Makes only reads fail; increments and writes still succeed.
    pub fn set_fail_gets(&self, fail: bool) {
        self.fail_gets.store(fail, Ordering::SeqCst);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(key)
            .filter(|(_, exp)| exp.is_none_or(|e| Instant::now() < e))
            .map(|(v, _)| v.clone())
    }

    pub fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }

    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), None));
    }

    fn check(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Connection("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn increment(&self, key: &str) -> StoreResult<u64> {
        self.check()?;
        let mut entries = self.entries.lock().unwrap();
        let entry = entries
            .entry(key.to_string())
            .or_insert_with(|| ("0".to_string(), None));
        let next = entry
            .0
            .parse::<u64>()
            .map_err(|e| StoreError::InvalidValue(e.to_string()))?
            + 1;
        entry.0 = next.to_string();
        Ok(next)
    }

    async fn get_string(&self, key: &str) -> StoreResult<Option<String>> {
        self.check()?;
        if self.fail_gets.load(Ordering::SeqCst) {
            return Err(StoreError::Timeout(Duration::from_secs(2)));
        }
        Ok(self.raw(key))
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<()> {
        self.check()?;
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().unwrap().insert(
            key.to_string(),
            (value.to_string(), Some(Instant::now() + ttl)),
        );
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.check()
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryStore>) {
    let store = InMemoryStore::new();
    let state = AppState::new(store.clone());
    (state, store)
}
