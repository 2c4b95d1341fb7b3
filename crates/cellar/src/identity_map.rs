//! Task-scoped identity map.
//!
//! One canonical in-memory instance per `(entity type, primary key)`
//! within a unit of work. Storage is task-local: concurrent tasks never
//! observe each other's maps, so no locking is involved.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::future::Future;
use std::sync::Arc;

use indexmap::IndexMap;

use cellar_core::stmt::Value;

use crate::cache::CacheStats;

/// A materialized entity that can live in the identity map.
///
/// The map stores one canonical `Arc` per `(type, primary key)` pair;
/// implementors expose the key their row is identified by.
pub trait Entity: Any + Send + Sync {
    fn primary_key(&self) -> Value;
}

#[derive(Default)]
struct MapState {
    entries: IndexMap<(TypeId, Value), Arc<dyn Any + Send + Sync>>,
    hits: u64,
    misses: u64,
}

tokio::task_local! {
    static CURRENT: RefCell<MapState>;
}

/// Runs `fut` inside an identity-map scope.
///
/// Entering a scope while one is already open on the current task shares
/// the outer map instead of starting empty; the map is dropped when the
/// outermost scope exits.
pub async fn scope<F>(fut: F) -> F::Output
where
    F: Future,
{
    if enabled() {
        fut.await
    } else {
        CURRENT.scope(RefCell::new(MapState::default()), fut).await
    }
}

/// Synchronous form of [`scope`].
pub fn scope_sync<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    if enabled() {
        f()
    } else {
        CURRENT.sync_scope(RefCell::new(MapState::default()), f)
    }
}

/// True while the current task has an open scope.
pub fn enabled() -> bool {
    CURRENT.try_with(|_| ()).is_ok()
}

/// Looks up the canonical instance for `(T, key)`.
///
/// Outside any open scope every lookup misses.
pub fn get<T: Entity>(key: &Value) -> Option<Arc<T>> {
    CURRENT
        .try_with(|state| {
            let mut state = state.borrow_mut();
            let entry = state.entries.get(&(TypeId::of::<T>(), key.clone())).cloned();
            match entry {
                Some(entry) => {
                    state.hits += 1;
                    entry.downcast::<T>().ok()
                }
                None => {
                    state.misses += 1;
                    None
                }
            }
        })
        .ok()
        .flatten()
}

/// Stores `entity` as the canonical instance for its key, replacing any
/// previous one. A no-op outside an open scope.
pub fn set<T: Entity>(entity: Arc<T>) {
    let _ = CURRENT.try_with(|state| {
        let key = (TypeId::of::<T>(), entity.primary_key());
        let entry: Arc<dyn Any + Send + Sync> = entity;
        state.borrow_mut().entries.insert(key, entry);
    });
}

/// Removes the cached instance for `(T, key)`, e.g. after a delete.
pub fn remove<T: Entity>(key: &Value) -> Option<Arc<T>> {
    CURRENT
        .try_with(|state| {
            state
                .borrow_mut()
                .entries
                .shift_remove(&(TypeId::of::<T>(), key.clone()))
                .and_then(|entry| entry.downcast::<T>().ok())
        })
        .ok()
        .flatten()
}

pub fn clear() {
    let _ = CURRENT.try_with(|state| state.borrow_mut().entries.clear());
}

pub fn len() -> usize {
    CURRENT
        .try_with(|state| state.borrow().entries.len())
        .unwrap_or(0)
}

/// Every cached instance of `T`, in insertion order.
pub fn all<T: Entity>() -> Vec<Arc<T>> {
    CURRENT
        .try_with(|state| {
            state
                .borrow()
                .entries
                .iter()
                .filter(|((type_id, _), _)| *type_id == TypeId::of::<T>())
                .filter_map(|(_, entry)| entry.clone().downcast::<T>().ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Hit/miss counters for the current scope's map. Zero outside a scope.
pub fn stats() -> CacheStats {
    CURRENT
        .try_with(|state| {
            let state = state.borrow();
            CacheStats {
                hits: state.hits,
                misses: state.misses,
                evictions: 0,
                expirations: 0,
                size: state.entries.len(),
            }
        })
        .unwrap_or_default()
}
