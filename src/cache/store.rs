//! Cache Store Module
//!
//! HashMap storage combined with LRU tracking and sliding expiration.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheKey, CacheStats, LruTracker};

// == View Cache Store ==
/// Bounded view storage with sliding expiration and LRU eviction.
///
/// Not synchronized; [`ViewCache`](super::ViewCache) wraps it in a lock.
#[derive(Debug)]
pub struct ViewCacheStore<V> {
    entries: HashMap<CacheKey, CacheEntry<V>>,
    lru: LruTracker<CacheKey>,
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Sliding expiration applied to every entry
    sliding: Duration,
}

impl<V: Clone> ViewCacheStore<V> {
    // == Constructor ==
    /// Creates a store holding at most `max_entries` views (at least one).
    pub fn new(max_entries: usize, sliding: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries: max_entries.max(1),
            sliding,
        }
    }

    // == Get ==
    /// Returns a live value and restarts its sliding window.
    ///
    /// Expired entries are removed and counted as misses.
    pub fn get(&mut self, key: &CacheKey) -> Option<V> {
        match self.entries.get_mut(key) {
            Some(entry) if !entry.is_expired() => {
                entry.touch();
                let value = entry.value.clone();
                self.stats.record_hit();
                self.lru.touch(key);
                return Some(value);
            }
            Some(_) => {
                self.entries.remove(key);
                self.lru.remove(key);
                self.stats.record_expirations(1);
                self.stats.set_total_entries(self.entries.len());
            }
            None => {}
        }

        self.stats.record_miss();
        None
    }

    // == Insert ==
    /// Stores a freshly built value, replacing any previous one.
    ///
    /// If the store is at capacity, the least recently used entry is evicted.
    pub fn insert(&mut self, key: CacheKey, value: V) {
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            if let Some(evicted) = self.lru.evict_oldest() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
            }
        }

        self.entries.insert(key, CacheEntry::new(value, self.sliding));
        self.lru.touch(&key);
        self.stats.record_build();
        self.stats.set_total_entries(self.entries.len());
    }

    // == Remove ==
    /// Drops an entry. Returns whether it existed.
    pub fn remove(&mut self, key: &CacheKey) -> bool {
        let existed = self.entries.remove(key).is_some();
        if existed {
            self.lru.remove(key);
            self.stats.set_total_entries(self.entries.len());
        }
        existed
    }

    // == Cleanup Expired ==
    /// Removes all expired entries. Returns the number removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<CacheKey> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| *key)
            .collect();

        for key in &expired_keys {
            self.entries.remove(key);
            self.lru.remove(key);
        }

        self.stats.record_expirations(expired_keys.len());
        self.stats.set_total_entries(self.entries.len());
        expired_keys.len()
    }

    // == Next Expiry ==
    /// Shortest idle time left among live entries, or None when nothing
    /// live is cached.
    pub fn next_expiry(&self) -> Option<Duration> {
        self.entries
            .values()
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.idle_remaining())
            .min()
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn sliding(&self) -> Duration {
        self.sliding
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
