//! Response DTOs for the catalog HTTP API

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub builds: u64,
    pub expirations: u64,
    pub evictions: u64,
    /// Current number of cached views
    pub total_entries: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
    /// Sliding expiration window in seconds
    pub sliding_window_secs: u64,
    /// Seconds until the next cached view expires if unread; null when empty
    pub next_expiry_secs: Option<u64>,
}

impl StatsResponse {
    pub fn new(stats: &CacheStats, sliding_window_secs: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            builds: stats.builds,
            expirations: stats.expirations,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            sliding_window_secs,
            next_expiry_secs: None,
        }
    }

    pub fn with_next_expiry(mut self, next_expiry: Option<Duration>) -> Self {
        self.next_expiry_secs = next_expiry.map(|d| d.as_secs());
        self
    }
}

/// Response body for the flags endpoint (GET /flags)
#[derive(Debug, Clone, Serialize)]
pub struct FlagsResponse {
    pub flags: BTreeMap<String, bool>,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
