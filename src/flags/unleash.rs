//! Unleash-compatible toggle service client.
//!
//! Keeps an in-memory snapshot of every toggle. Lookups read the snapshot
//! only; the network is touched by [`UnleashFlags::refresh`], which the
//! background refresh task calls on an interval.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::FeatureFlags;
use crate::config::Config;
use crate::error::{CatalogError, Result};

/// Connection settings for the toggle service.
#[derive(Debug, Clone)]
pub struct UnleashSettings {
    /// API root, e.g. `http://localhost:4242/api`
    pub api_url: String,
    /// Static credential sent verbatim in the `Authorization` header
    pub api_token: String,
    pub app_name: String,
    pub timeout: Duration,
}

impl UnleashSettings {
    /// Settings from configuration, or None when no toggle service is configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        config.unleash_api_url.as_ref().map(|api_url| Self {
            api_url: api_url.clone(),
            api_token: config.unleash_api_token.clone(),
            app_name: config.unleash_app_name.clone(),
            timeout: config.flag_timeout(),
        })
    }

    fn features_url(&self) -> String {
        format!("{}/client/features", self.api_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Deserialize)]
struct FeaturesResponse {
    #[serde(default)]
    features: Vec<FeatureToggle>,
}

#[derive(Debug, Deserialize)]
struct FeatureToggle {
    name: String,
    #[serde(default)]
    enabled: bool,
}

// == Unleash Flags ==
/// Flag resolver backed by a toggle service snapshot.
#[derive(Debug)]
pub struct UnleashFlags {
    client: reqwest::Client,
    settings: UnleashSettings,
    toggles: RwLock<BTreeMap<String, bool>>,
}

impl UnleashFlags {
    /// Builds the client. Starts with an empty snapshot: every flag is
    /// disabled until the first successful refresh.
    pub fn new(settings: UnleashSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| CatalogError::Internal(format!("toggle client: {}", e)))?;

        Ok(Self {
            client,
            settings,
            toggles: RwLock::new(BTreeMap::new()),
        })
    }

    /// Fetches every toggle and replaces the snapshot.
    ///
    /// On failure the snapshot is cleared, so every flag reads disabled
    /// until the service answers again. Returns the number of toggles now
    /// known.
    pub async fn refresh(&self) -> Result<usize> {
        match self.fetch().await {
            Ok(fresh) => {
                let count = fresh.len();
                *self.toggles.write().await = fresh;
                debug!("Toggle snapshot refreshed: {} toggles", count);
                Ok(count)
            }
            Err(e) => {
                self.toggles.write().await.clear();
                Err(e)
            }
        }
    }

    /// Refreshes and logs instead of failing. Used at startup and by the
    /// refresh task.
    pub async fn refresh_or_warn(&self) {
        if let Err(e) = self.refresh().await {
            warn!("Toggle service unreachable, all flags disabled: {}", e);
        }
    }

    async fn fetch(&self) -> Result<BTreeMap<String, bool>> {
        let mut request = self
            .client
            .get(self.settings.features_url())
            .header("UNLEASH-APPNAME", &self.settings.app_name);
        if !self.settings.api_token.is_empty() {
            request = request.header(reqwest::header::AUTHORIZATION, &self.settings.api_token);
        }

        let response = request
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| CatalogError::FlagServiceUnavailable(e.to_string()))?;

        let body: FeaturesResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::FlagServiceUnavailable(e.to_string()))?;

        Ok(body
            .features
            .into_iter()
            .map(|f| (f.name, f.enabled))
            .collect())
    }
}

#[async_trait]
impl FeatureFlags for UnleashFlags {
    async fn is_enabled(&self, flag_id: &str) -> bool {
        self.toggles
            .read()
            .await
            .get(flag_id)
            .copied()
            .unwrap_or(false)
    }

    async fn snapshot(&self) -> BTreeMap<String, bool> {
        self.toggles.read().await.clone()
    }
}
