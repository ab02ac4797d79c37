//! Feature Flags Module
//!
//! Resolves toggle identifiers (opaque short codes such as `FT0001`) to
//! enabled/disabled. Lookups never fail: unknown flags and an unreachable
//! toggle service both read as disabled.

mod static_flags;
mod unleash;

use std::collections::BTreeMap;

use async_trait::async_trait;

pub use static_flags::StaticFlags;
pub use unleash::{UnleashFlags, UnleashSettings};

/// Process-wide feature flag resolver.
#[async_trait]
pub trait FeatureFlags: Send + Sync {
    /// Whether `flag_id` is enabled. Unknown flags are disabled.
    async fn is_enabled(&self, flag_id: &str) -> bool;

    /// Every known flag and its state.
    async fn snapshot(&self) -> BTreeMap<String, bool>;
}
