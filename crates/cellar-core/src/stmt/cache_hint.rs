use std::time::Duration;

/// Marks a query as eligible for the result cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheHint {
    /// Entry-specific TTL override. `None` uses the cache-wide default.
    pub ttl: Option<Duration>,
}
