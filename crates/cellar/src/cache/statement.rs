use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};

use lru::LruCache;

use super::CacheStats;

/// Fixed-capacity LRU cache mapping SQL text to a prepared-statement
/// handle.
///
/// Handles are stored opaquely and never validated; a caller holding a
/// handle that turned stale deletes the key and prepares again. While
/// disabled, `get` and `set` pass through without touching entries or
/// counters, so existing state survives e.g. a schema-mutation window.
#[derive(Debug)]
pub struct StatementCache<V> {
    inner: Mutex<State<V>>,
}

#[derive(Debug)]
struct State<V> {
    entries: LruCache<String, V>,
    enabled: bool,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl<V> StatementCache<V> {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).expect("capacity must be > 0");
        Self {
            inner: Mutex::new(State {
                entries: LruCache::new(capacity),
                enabled: true,
                hits: 0,
                misses: 0,
                evictions: 0,
            }),
        }
    }

    /// Returns the handle cached for `sql` and promotes it to most
    /// recently used. Always misses while the cache is disabled.
    pub fn get(&self, sql: &str) -> Option<V>
    where
        V: Clone,
    {
        let mut state = self.lock();

        if !state.enabled {
            return None;
        }

        let hit = state.entries.get(sql).cloned();
        match hit {
            Some(value) => {
                state.hits += 1;
                Some(value)
            }
            None => {
                state.misses += 1;
                None
            }
        }
    }

    /// Stores `handle` under `sql`.
    ///
    /// Updating an existing key replaces its value and promotes it.
    /// Inserting a new key past capacity evicts the least recently used
    /// entry, which is returned so the caller can release it.
    pub fn set(&self, sql: impl Into<String>, handle: V) -> Option<V> {
        let mut state = self.lock();

        if !state.enabled {
            return None;
        }

        let key = sql.into();
        match state.entries.push(key.clone(), handle) {
            Some((evicted_key, value)) if evicted_key != key => {
                state.evictions += 1;
                tracing::debug!(key = %evicted_key, "statement cache eviction");
                Some(value)
            }
            _ => None,
        }
    }

    pub fn delete(&self, sql: &str) -> Option<V> {
        self.lock().entries.pop(sql)
    }

    /// Drops every entry, returning the evicted handles.
    pub fn clear(&self) -> Vec<V> {
        let mut state = self.lock();
        let mut values = Vec::with_capacity(state.entries.len());
        while let Some((_, value)) = state.entries.pop_lru() {
            values.push(value);
        }
        values
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.lock().enabled = enabled;
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
            expirations: 0,
            size: state.entries.len(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State<V>> {
        self.inner.lock().unwrap()
    }
}
