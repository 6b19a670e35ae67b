//! Counter Cache Backend
//!
//! The key-value port used by the tally layer, plus the in-memory
//! implementation with TTL expiry.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

// == Backend Error ==
/// The cache backend could not be reached.
///
/// Readers treat this as a miss and recompute; writers log and move on.
/// The underlying vote/feedback records stay authoritative either way.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("counter cache backend unavailable")]
pub struct CacheUnavailable;

// == Counter Cache Port ==
/// Key-value interface the tally layer depends on.
///
/// Injected explicitly so tests can substitute fakes, including one that
/// simulates an unreachable backend.
pub trait CounterCache: Send + Sync {
    /// Returns the cached value for `key`, or None on a miss.
    fn get(&self, key: &str) -> Result<Option<u64>, CacheUnavailable>;

    /// Stores `value` under `key` with the given expiry in seconds.
    fn set(&self, key: &str, value: u64, ttl_secs: u64) -> Result<(), CacheUnavailable>;
}

// == Counter Entry ==
/// A single cached counter with its expiration timestamp.
#[derive(Debug, Clone)]
struct CounterEntry {
    value: u64,
    /// Expiration timestamp (Unix milliseconds)
    expires_at: u64,
}

impl CounterEntry {
    fn new(value: u64, ttl_secs: u64) -> Self {
        Self {
            value,
            expires_at: current_timestamp_ms() + ttl_secs * 1000,
        }
    }

    /// An entry is expired once the current time reaches `expires_at`.
    fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }
}

// == In-Memory Counter Cache ==
/// In-memory counter cache with per-entry TTL.
///
/// Uses interior mutability so it can be shared across request handlers
/// without external coordination; overwrites are last-writer-wins.
#[derive(Debug, Default)]
pub struct InMemoryCounterCache {
    entries: RwLock<HashMap<String, CounterEntry>>,
}

impl InMemoryCounterCache {
    pub fn new() -> Self {
        Self::default()
    }

    // == Purge Expired ==
    /// Removes all expired entries.
    ///
    /// Returns the number of entries removed. Run periodically by the
    /// background cleanup task; expiry is only a safety net on top of
    /// the explicit refresh-on-write path.
    pub fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().unwrap();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        before - entries.len()
    }

    /// Current number of cached counters, expired entries included.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

impl CounterCache for InMemoryCounterCache {
    fn get(&self, key: &str) -> Result<Option<u64>, CacheUnavailable> {
        let entries = self.entries.read().unwrap();
        match entries.get(key) {
            Some(entry) if !entry.is_expired() => Ok(Some(entry.value)),
            // Expired entries read as misses; the cleanup task reclaims them.
            _ => Ok(None),
        }
    }

    fn set(&self, key: &str, value: u64, ttl_secs: u64) -> Result<(), CacheUnavailable> {
        let mut entries = self.entries.write().unwrap();
        entries.insert(key.to_string(), CounterEntry::new(value, ttl_secs));
        Ok(())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_set_and_get() {
        let cache = InMemoryCounterCache::new();

        cache.set("proposal_1_plus_one", 3, 300).unwrap();
        assert_eq!(cache.get("proposal_1_plus_one").unwrap(), Some(3));
    }

    #[test]
    fn test_get_missing_key() {
        let cache = InMemoryCounterCache::new();
        assert_eq!(cache.get("proposal_1_plus_one").unwrap(), None);
    }

    #[test]
    fn test_overwrite() {
        let cache = InMemoryCounterCache::new();

        cache.set("proposal_1_plus_one", 3, 300).unwrap();
        cache.set("proposal_1_plus_one", 4, 300).unwrap();

        assert_eq!(cache.get("proposal_1_plus_one").unwrap(), Some(4));
    }

    #[test]
    fn test_expired_entry_reads_as_miss() {
        let cache = InMemoryCounterCache::new();

        cache.set("proposal_1_plus_one", 3, 1).unwrap();
        assert_eq!(cache.get("proposal_1_plus_one").unwrap(), Some(3));

        sleep(Duration::from_millis(1100));

        assert_eq!(cache.get("proposal_1_plus_one").unwrap(), None);
    }

    #[test]
    fn test_purge_expired() {
        let cache = InMemoryCounterCache::new();

        cache.set("proposal_1_plus_one", 3, 1).unwrap();
        cache.set("proposal_1_feedback_count", 2, 300).unwrap();

        sleep(Duration::from_millis(1100));

        let removed = cache.purge_expired();
        assert_eq!(removed, 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("proposal_1_feedback_count").unwrap(), Some(2));
    }

    #[test]
    fn test_purge_on_empty_cache() {
        let cache = InMemoryCounterCache::new();
        assert_eq!(cache.purge_expired(), 0);
        assert!(cache.is_empty());
    }
}
