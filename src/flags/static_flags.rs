//! Fixed flag set, used when no toggle service is configured.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;

use super::FeatureFlags;

/// Flags whose state never changes after construction.
#[derive(Debug, Clone, Default)]
pub struct StaticFlags {
    enabled: BTreeSet<String>,
}

impl StaticFlags {
    /// Every listed flag is enabled; all others are disabled.
    pub fn new<I, S>(enabled: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: enabled.into_iter().map(Into::into).collect(),
        }
    }

    /// No flag enabled.
    pub fn none() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeatureFlags for StaticFlags {
    async fn is_enabled(&self, flag_id: &str) -> bool {
        self.enabled.contains(flag_id)
    }

    async fn snapshot(&self) -> BTreeMap<String, bool> {
        self.enabled.iter().map(|id| (id.clone(), true)).collect()
    }
}
