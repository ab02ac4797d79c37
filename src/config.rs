//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default identifier of the "bucket of 6" routing flag.
pub const DEFAULT_BUCKET_FLAG: &str = "FT0001";

/// Default identifier of the "many small pages" routing flag.
pub const DEFAULT_SMALL_PAGES_FLAG: &str = "FT0002";

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Page size used when a request does not carry one
    pub items_per_page: u32,
    /// Sliding expiration window for cached views, in seconds
    pub cache_sliding_secs: u64,
    /// Maximum number of cached views before LRU eviction kicks in
    pub cache_max_entries: usize,
    /// Expired-entry sweep interval in seconds
    pub cleanup_interval: u64,
    /// Base URL substituted into stored picture references
    pub catalog_base_url: String,
    /// Upper bound on a single repository call, in milliseconds
    pub repository_timeout_ms: u64,
    /// Toggle service API root, e.g. `http://localhost:4242/api`. None = static flags
    pub unleash_api_url: Option<String>,
    /// Static credential sent in the `Authorization` header
    pub unleash_api_token: String,
    /// Application name reported to the toggle service
    pub unleash_app_name: String,
    /// Toggle snapshot refresh interval in seconds
    pub flag_refresh_interval: u64,
    /// Upper bound on a toggle service call, in milliseconds
    pub flag_timeout_ms: u64,
    /// Flags treated as enabled when no toggle service is configured
    pub enabled_flags: Vec<String>,
    /// Flag gating the three-per-page route
    pub small_pages_flag: String,
    /// Flag gating the six-per-page route
    pub bucket_flag: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `ITEMS_PER_PAGE` - Default page size (default: 10)
    /// - `CACHE_SLIDING_SECS` - Sliding expiration window (default: 30)
    /// - `CACHE_MAX_ENTRIES` - Maximum cached views (default: 1000)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 10)
    /// - `CATALOG_BASE_URL` - Picture base URL (default: http://localhost:5106)
    /// - `REPOSITORY_TIMEOUT_MS` - Repository call timeout (default: 5000)
    /// - `UNLEASH_API_URL` - Toggle service API root (default: unset)
    /// - `UNLEASH_API_TOKEN` - Toggle service credential (default: empty)
    /// - `UNLEASH_APP_NAME` - App name sent to the toggle service (default: catalog-views)
    /// - `FLAG_REFRESH_INTERVAL` - Toggle refresh frequency in seconds (default: 15)
    /// - `FLAG_TIMEOUT_MS` - Toggle service call timeout (default: 2000)
    /// - `ENABLED_FLAGS` - Comma separated static flags (default: empty)
    /// - `SMALL_PAGES_FLAG` / `BUCKET_FLAG` - Routing flag ids (default: FT0002 / FT0001)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            items_per_page: env_or("ITEMS_PER_PAGE", defaults.items_per_page),
            cache_sliding_secs: env_or("CACHE_SLIDING_SECS", defaults.cache_sliding_secs),
            cache_max_entries: env_or("CACHE_MAX_ENTRIES", defaults.cache_max_entries),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
            catalog_base_url: env_or("CATALOG_BASE_URL", defaults.catalog_base_url),
            repository_timeout_ms: env_or("REPOSITORY_TIMEOUT_MS", defaults.repository_timeout_ms),
            unleash_api_url: env::var("UNLEASH_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            unleash_api_token: env_or("UNLEASH_API_TOKEN", defaults.unleash_api_token),
            unleash_app_name: env_or("UNLEASH_APP_NAME", defaults.unleash_app_name),
            flag_refresh_interval: env_or("FLAG_REFRESH_INTERVAL", defaults.flag_refresh_interval),
            flag_timeout_ms: env_or("FLAG_TIMEOUT_MS", defaults.flag_timeout_ms),
            enabled_flags: env::var("ENABLED_FLAGS")
                .map(|v| parse_flag_list(&v))
                .unwrap_or_default(),
            small_pages_flag: env_or("SMALL_PAGES_FLAG", defaults.small_pages_flag),
            bucket_flag: env_or("BUCKET_FLAG", defaults.bucket_flag),
        }
    }

    /// Sliding expiration window as a Duration.
    pub fn cache_sliding_window(&self) -> Duration {
        Duration::from_secs(self.cache_sliding_secs)
    }

    /// Repository call timeout as a Duration.
    pub fn repository_timeout(&self) -> Duration {
        Duration::from_millis(self.repository_timeout_ms)
    }

    /// Toggle service call timeout as a Duration.
    pub fn flag_timeout(&self) -> Duration {
        Duration::from_millis(self.flag_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            items_per_page: 10,
            cache_sliding_secs: 30,
            cache_max_entries: 1000,
            cleanup_interval: 10,
            catalog_base_url: "http://localhost:5106".to_string(),
            repository_timeout_ms: 5000,
            unleash_api_url: None,
            unleash_api_token: String::new(),
            unleash_app_name: "catalog-views".to_string(),
            flag_refresh_interval: 15,
            flag_timeout_ms: 2000,
            enabled_flags: Vec::new(),
            small_pages_flag: DEFAULT_SMALL_PAGES_FLAG.to_string(),
            bucket_flag: DEFAULT_BUCKET_FLAG.to_string(),
        }
    }
}

/// Reads and parses an environment variable, falling back when unset or malformed.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Splits a comma separated flag list, dropping blanks.
fn parse_flag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.items_per_page, 10);
        assert_eq!(config.cache_sliding_window(), Duration::from_secs(30));
        assert_eq!(config.repository_timeout(), Duration::from_secs(5));
        assert!(config.unleash_api_url.is_none());
        assert_eq!(config.bucket_flag, "FT0001");
        assert_eq!(config.small_pages_flag, "FT0002");
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("ITEMS_PER_PAGE");
        env::remove_var("CACHE_SLIDING_SECS");
        env::remove_var("UNLEASH_API_URL");
        env::remove_var("ENABLED_FLAGS");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.items_per_page, 10);
        assert_eq!(config.cache_sliding_secs, 30);
        assert!(config.unleash_api_url.is_none());
        assert!(config.enabled_flags.is_empty());
    }

    #[test]
    fn test_parse_flag_list() {
        assert_eq!(
            parse_flag_list(" FT0001, ,FT0002 ,"),
            vec!["FT0001".to_string(), "FT0002".to_string()]
        );
        assert!(parse_flag_list("").is_empty());
    }

    #[test]
    fn test_env_or_falls_back_on_garbage() {
        env::set_var("CATALOG_VIEWS_TEST_GARBAGE", "not-a-number");
        let value: u64 = env_or("CATALOG_VIEWS_TEST_GARBAGE", 7);
        assert_eq!(value, 7);
        env::remove_var("CATALOG_VIEWS_TEST_GARBAGE");
    }
}
