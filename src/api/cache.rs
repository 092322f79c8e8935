//! In-memory response cache with request de-duplication.
//!
//! List responses are cached under a key built from the endpoint and its
//! sorted query parameters, so the same filter combination always maps to
//! the same entry. An entry is served while it is younger than the configured
//! TTL.
//!
//! ## De-duplication
//!
//! Concurrent callers asking for the same key serialize on a per-key async
//! lock. The first caller performs the request and fills the cache; the
//! others wake up, find a fresh entry and return it without touching the
//! network.
//!
//! ```text
//! caller A ──lock(key)──▶ miss ──▶ GET ──▶ insert ──unlock──┐
//! caller B ──lock(key)──────────── waits ───────────────────┴─▶ hit
//! ```

use parking_lot::Mutex;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex as AsyncMutex;

/// Query parameters in deterministic order.
pub type Query = BTreeMap<String, String>;

/// Builds the cache key `endpoint?k1=v1&k2=v2` with keys in sorted order.
pub fn request_key(endpoint: &str, query: &Query) -> String {
    let endpoint = endpoint.trim_matches('/');
    if query.is_empty() {
        return endpoint.to_string();
    }
    let params = query.iter().map(|(k, v)| format!("{}={}", k, v)).collect::<Vec<_>>().join("&");
    format!("{}?{}", endpoint, params)
}

#[derive(Debug, Clone)]
struct CacheEntry {
    stored_at: Instant,
    value: Value,
}

#[derive(Debug)]
pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
    inflight: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
            inflight: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fresh value for `key`; stale entries are dropped on access.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.get_at(key, Instant::now())
    }

    fn get_at(&self, key: &str, now: Instant) -> Option<Value> {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if now.duration_since(entry.stored_at) < self.ttl => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn insert(&self, key: &str, value: Value) {
        self.entries.lock().insert(
            key.to_string(),
            CacheEntry {
                stored_at: Instant::now(),
                value,
            },
        );
    }

    /// Drops every entry belonging to `endpoint`, including all of its query
    /// variants and sub-resources.
    pub fn invalidate(&self, endpoint: &str) {
        let resource = endpoint.trim_matches('/');
        let resource = resource.split('/').next().unwrap_or(resource);
        self.entries.lock().retain(|key, _| {
            let path = key.split('?').next().unwrap_or(key);
            path != resource && !path.starts_with(&format!("{}/", resource))
        });
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Lock shared by every in-flight request for `key`.
    pub fn request_lock(&self, key: &str) -> Arc<AsyncMutex<()>> {
        self.inflight.lock().entry(key.to_string()).or_insert_with(|| Arc::new(AsyncMutex::new(()))).clone()
    }

    /// Forgets the lock for `key` once nobody else holds a handle to it.
    pub fn release_lock(&self, key: &str) {
        let mut inflight = self.inflight.lock();
        if let Some(lock) = inflight.get(key) {
            if Arc::strong_count(lock) == 1 {
                inflight.remove(key);
            }
        }
    }
}
