//! Time-bounded memoization.
//!
//! A [`TtlCache`] holds values alongside their insertion instant and treats
//! entries older than a fixed TTL as absent. Staleness is checked on read;
//! there is no background sweep and no invalidation on write. The clock is
//! injected so expiry can be driven deterministically.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, Instant};

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for tests and simulations
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self { now: Arc::new(Mutex::new(Instant::now())) }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

/// Key/value cache with a fixed time-to-live.
///
/// Concurrent refreshes of the same key are not coordinated: each caller
/// computes its own value and the last `insert` wins.
pub struct TtlCache<K, V> {
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Create a cache using the system clock
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        tracing::info!(ttl_secs = ttl.as_secs(), "Initializing TTL cache");
        Self { entries: RwLock::new(HashMap::new()), ttl, clock }
    }

    /// Fresh value for `key`, if one was inserted less than `ttl` ago
    pub fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        let entry = entries.get(key)?;
        let age = self.clock.now().saturating_duration_since(entry.inserted_at);
        if age < self.ttl {
            tracing::debug!(age_ms = age.as_millis() as u64, "Cache hit");
            Some(entry.value.clone())
        } else {
            tracing::debug!("Cache entry expired");
            None
        }
    }

    /// Store `value`, replacing any previous entry for `key`
    pub fn insert(&self, key: K, value: V) {
        let entry = CacheEntry { value, inserted_at: self.clock.now() };
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key, entry);
    }

    pub fn invalidate(&self, key: &K) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
    }

    /// Number of stored entries, stale ones included
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(ttl_secs: u64) -> (TtlCache<String, Vec<u32>>, ManualClock) {
        let clock = ManualClock::new();
        let cache = TtlCache::with_clock(Duration::from_secs(ttl_secs), Arc::new(clock.clone()));
        (cache, clock)
    }

    #[test]
    fn test_cache_miss_when_empty() {
        let (cache, _) = cache(300);
        assert!(cache.get(&"key".to_string()).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_hit_within_ttl() {
        let (cache, clock) = cache(300);
        cache.insert("key".to_string(), vec![1, 2, 3]);

        clock.advance(Duration::from_secs(299));
        assert_eq!(cache.get(&"key".to_string()), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_entry_expires_at_ttl() {
        let (cache, clock) = cache(300);
        cache.insert("key".to_string(), vec![1]);

        clock.advance(Duration::from_secs(300));
        assert!(cache.get(&"key".to_string()).is_none());
        // stale entries stay until overwritten
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_insert_overwrites_and_resets_age() {
        let (cache, clock) = cache(300);
        cache.insert("key".to_string(), vec![1]);
        clock.advance(Duration::from_secs(200));
        cache.insert("key".to_string(), vec![2]);
        clock.advance(Duration::from_secs(200));

        assert_eq!(cache.get(&"key".to_string()), Some(vec![2]));
    }

    #[test]
    fn test_invalidate_removes_entry() {
        let (cache, _) = cache(300);
        cache.insert("key".to_string(), vec![1]);
        cache.invalidate(&"key".to_string());
        assert!(cache.get(&"key".to_string()).is_none());
        assert!(cache.is_empty());
    }
}
