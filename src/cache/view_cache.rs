//! Shared view cache with get-or-build semantics.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheKey, CacheStats, ViewCacheStore};
use crate::error::Result;

// == View Cache ==
/// Process-wide, cloneable handle to a [`ViewCacheStore`].
///
/// Best effort: two concurrent misses on the same key both run their
/// builder and the last insert wins. The lock is never held while a
/// builder runs.
#[derive(Debug)]
pub struct ViewCache<V> {
    store: Arc<RwLock<ViewCacheStore<V>>>,
}

impl<V> Clone for ViewCache<V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<V: Clone> ViewCache<V> {
    pub fn new(max_entries: usize, sliding: Duration) -> Self {
        Self {
            store: Arc::new(RwLock::new(ViewCacheStore::new(max_entries, sliding))),
        }
    }

    /// Shared handle to the underlying store, for the cleanup task.
    pub fn store(&self) -> Arc<RwLock<ViewCacheStore<V>>> {
        Arc::clone(&self.store)
    }

    // == Get Or Build ==
    /// Returns the cached value for `key`, building and storing it on a miss.
    ///
    /// A failed build propagates and leaves the cache untouched.
    pub async fn get_or_build<F, Fut>(&self, key: CacheKey, build: F) -> Result<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        // Write lock: a hit slides the window and updates LRU order
        let cached = self.store.write().await.get(&key);
        if let Some(value) = cached {
            debug!(key = %key, "view cache hit");
            return Ok(value);
        }

        debug!(key = %key, "view cache miss, building");
        let value = build().await?;

        self.store.write().await.insert(key, value.clone());
        Ok(value)
    }

    /// Drops the entry for `key` so the next request rebuilds it.
    pub async fn invalidate(&self, key: &CacheKey) -> bool {
        let removed = self.store.write().await.remove(key);
        if removed {
            debug!(key = %key, "view cache entry invalidated");
        }
        removed
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    /// Idle time left before the next live entry expires.
    pub async fn next_expiry(&self) -> Option<Duration> {
        self.store.read().await.next_expiry()
    }
}
