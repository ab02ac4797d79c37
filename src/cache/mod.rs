//! Cache Module
//!
//! In-memory view caching with sliding expiration and LRU eviction.

mod entry;
mod key;
mod lru;
mod stats;
mod store;
mod view_cache;


// Re-export public types
pub use entry::CacheEntry;
pub use key::CacheKey;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::ViewCacheStore;
pub use view_cache::ViewCache;
