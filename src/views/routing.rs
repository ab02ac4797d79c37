//! Experimental page-size routing.
//!
//! Two flag-gated variants may replace the requested page size depending on
//! how many items match. Both flags are resolved once per request and at
//! most one variant applies: the bucket route wins over the small-pages
//! route when both qualify.

use crate::config::Config;
use crate::flags::FeatureFlags;

/// Page size forced by the small-pages route.
pub const SMALL_PAGE_SIZE: u32 = 3;

/// Page size forced by the bucket route.
pub const BUCKET_PAGE_SIZE: u32 = 6;

/// Flag identifiers gating each route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingFlags {
    /// Enables [`PageRoute::SmallPages`]
    pub small_pages: String,
    /// Enables [`PageRoute::Bucket`]
    pub bucket: String,
}

impl RoutingFlags {
    pub fn from_config(config: &Config) -> Self {
        Self {
            small_pages: config.small_pages_flag.clone(),
            bucket: config.bucket_flag.clone(),
        }
    }

    /// Resolves both flags once and picks the route for `total_items`.
    pub async fn resolve(&self, flags: &dyn FeatureFlags, total_items: u64) -> PageRoute {
        let small_pages = flags.is_enabled(&self.small_pages).await;
        let bucket = flags.is_enabled(&self.bucket).await;
        PageRoute::choose(total_items, small_pages, bucket)
    }
}

impl Default for RoutingFlags {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

// == Page Route ==
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRoute {
    /// Caller's page size
    Default,
    /// Three per page, when the total is a multiple of six
    SmallPages,
    /// Six per page, when everything fits in one bucket of six
    Bucket,
}

impl PageRoute {
    pub fn choose(total_items: u64, small_pages_enabled: bool, bucket_enabled: bool) -> Self {
        if bucket_enabled && total_items <= u64::from(BUCKET_PAGE_SIZE) {
            PageRoute::Bucket
        } else if small_pages_enabled && total_items % 6 == 0 {
            PageRoute::SmallPages
        } else {
            PageRoute::Default
        }
    }

    /// Page size to cut the listing with.
    pub fn page_size(self, requested: u32) -> u32 {
        match self {
            PageRoute::Default => requested,
            PageRoute::SmallPages => SMALL_PAGE_SIZE,
            PageRoute::Bucket => BUCKET_PAGE_SIZE,
        }
    }
}
