//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with sliding expiration.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cached view with access metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The cached value
    pub value: V,
    /// When the value was stored
    pub created_at: Instant,
    /// Last read or write; the sliding window restarts here
    pub last_accessed: Instant,
    /// Idle time after which the entry is gone
    pub sliding: Duration,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry that expires after `sliding` without access.
    pub fn new(value: V, sliding: Duration) -> Self {
        let now = Instant::now();
        Self {
            value,
            created_at: now,
            last_accessed: now,
            sliding,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has been idle for longer than its window.
    ///
    /// Boundary condition: at exactly `sliding` idle time the entry is still
    /// live; it expires strictly after.
    pub fn is_expired(&self) -> bool {
        self.last_accessed.elapsed() > self.sliding
    }

    // == Touch ==
    /// Records an access, restarting the sliding window.
    pub fn touch(&mut self) {
        self.last_accessed = Instant::now();
    }

    // == Idle Remaining ==
    /// Time left before the entry expires if nobody reads it. Zero once expired.
    pub fn idle_remaining(&self) -> Duration {
        self.sliding.saturating_sub(self.last_accessed.elapsed())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(30);

    #[tokio::test(start_paused = true)]
    async fn test_entry_creation() {
        let entry = CacheEntry::new("view".to_string(), WINDOW);

        assert_eq!(entry.value, "view");
        assert_eq!(entry.created_at, entry.last_accessed);
        assert!(!entry.is_expired());
        assert_eq!(entry.idle_remaining(), WINDOW);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_live_at_exact_boundary() {
        let entry = CacheEntry::new(1u8, WINDOW);

        tokio::time::advance(WINDOW).await;
        assert!(!entry.is_expired(), "Entry should be live at the boundary");

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(entry.is_expired());
        assert_eq!(entry.idle_remaining(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_touch_slides_window() {
        let mut entry = CacheEntry::new(1u8, WINDOW);

        tokio::time::advance(Duration::from_secs(20)).await;
        entry.touch();
        tokio::time::advance(Duration::from_secs(20)).await;

        // 40s since creation, 20s since last access
        assert!(!entry.is_expired());
        assert_eq!(entry.idle_remaining(), Duration::from_secs(10));
        assert!(entry.last_accessed > entry.created_at);
    }
}
