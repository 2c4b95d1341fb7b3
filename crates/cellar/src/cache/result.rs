use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use cellar_core::stmt::{Row, Value};

use super::CacheStats;

/// Key identifying one cacheable execution: the canonical SQL text plus
/// the serialized argument list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(sql: &str, args: &[Value]) -> Self {
        let args = serde_json::to_string(args).expect("values serialize to JSON");
        Self(format!("{sql}|{args}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
struct Entry {
    rows: Arc<[Row]>,
    cached_at: Instant,
    ttl: Duration,
    last_accessed: Instant,
    access_count: u64,
}

/// TTL-aware LRU cache of materialized result sets.
///
/// Each entry carries its own TTL (an override supplied at `set` time or
/// the cache-wide default). Recency for eviction is `last_accessed`, not
/// insertion order.
#[derive(Debug)]
pub struct QueryResultCache {
    inner: Mutex<State>,
    capacity: usize,
    default_ttl: Duration,
}

#[derive(Debug)]
struct State {
    entries: HashMap<CacheKey, Entry>,
    enabled: bool,
    hits: u64,
    misses: u64,
    evictions: u64,
    expirations: u64,
}

impl QueryResultCache {
    pub fn new(capacity: usize, default_ttl: Duration) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            inner: Mutex::new(State {
                entries: HashMap::new(),
                enabled: true,
                hits: 0,
                misses: 0,
                evictions: 0,
                expirations: 0,
            }),
            capacity,
            default_ttl,
        }
    }

    /// Returns the cached rows for `key`.
    ///
    /// An entry past its TTL is removed and counted as both an
    /// expiration and a miss. A hit refreshes the entry's recency and
    /// access count.
    pub fn get(&self, key: &CacheKey) -> Option<Arc<[Row]>> {
        let now = Instant::now();
        let mut state = self.lock();

        if !state.enabled {
            return None;
        }

        match state.entries.get_mut(key) {
            Some(entry) if now.duration_since(entry.cached_at) <= entry.ttl => {
                entry.last_accessed = now;
                entry.access_count += 1;
                let rows = Arc::clone(&entry.rows);
                state.hits += 1;
                return Some(rows);
            }
            Some(_) => {
                state.entries.remove(key);
                state.expirations += 1;
                tracing::debug!(key = key.as_str(), "result cache entry expired");
            }
            None => {}
        }

        state.misses += 1;
        None
    }

    /// Stores `rows` under `key`. `ttl` overrides the cache-wide
    /// default.
    ///
    /// Inserting a new key past capacity evicts the entry with the
    /// oldest `last_accessed`; updating an existing key never evicts.
    pub fn set(&self, key: CacheKey, rows: Arc<[Row]>, ttl: Option<Duration>) {
        let now = Instant::now();
        let mut state = self.lock();

        if !state.enabled {
            return;
        }

        let entry = Entry {
            rows,
            cached_at: now,
            ttl: ttl.unwrap_or(self.default_ttl),
            last_accessed: now,
            access_count: 0,
        };

        if let Some(existing) = state.entries.get_mut(&key) {
            *existing = entry;
            return;
        }

        if state.entries.len() >= self.capacity {
            let oldest = state
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_accessed)
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                state.entries.remove(&oldest);
                state.evictions += 1;
                tracing::debug!(key = oldest.as_str(), "result cache eviction");
            }
        }

        state.entries.insert(key, entry);
    }

    /// Removes every entry whose key contains the quoted `table`
    /// identifier as a substring. Returns how many entries were removed.
    ///
    /// Matching is deliberately coarse. It may remove entries that only
    /// mention the table, and it can miss entries where the quoted name
    /// appears solely inside a string argument rather than as a table
    /// reference; over-invalidation is accepted, under-invalidation is a
    /// known limitation of substring matching.
    pub fn invalidate_table(&self, table: &str) -> usize {
        let needle = format!("\"{table}\"");
        let mut state = self.lock();

        let before = state.entries.len();
        state.entries.retain(|key, _| !key.as_str().contains(&needle));
        let removed = before - state.entries.len();

        if removed > 0 {
            tracing::debug!(table, removed, "result cache invalidation");
        }
        removed
    }

    /// Sweeps expired entries without waiting for `get` to observe them.
    pub fn prune_expired(&self) -> usize {
        let now = Instant::now();
        let mut state = self.lock();

        let before = state.entries.len();
        state
            .entries
            .retain(|_, entry| now.duration_since(entry.cached_at) <= entry.ttl);
        let removed = before - state.entries.len();

        state.expirations += removed as u64;
        removed
    }

    pub fn clear(&self) {
        self.lock().entries.clear();
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Disabling drops all entries; results cached before a disable
    /// window could be arbitrarily stale by the time it ends.
    pub fn set_enabled(&self, enabled: bool) {
        let mut state = self.lock();
        state.enabled = enabled;
        if !enabled {
            state.entries.clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.lock().enabled
    }

    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            evictions: state.evictions,
            expirations: state.expirations,
            size: state.entries.len(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.inner.lock().unwrap()
    }
}
