//! API Handlers
//!
//! HTTP request handlers for each catalog endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::catalog::{
    CatalogBrand, CatalogItemRepository, CatalogType, CatalogUriComposer, ReadRepository,
};
use crate::config::Config;
use crate::error::Result;
use crate::flags::FeatureFlags;
use crate::models::{CatalogQueryParams, FlagsResponse, HealthResponse, StatsResponse};
use crate::views::{
    CachedCatalogViewService, CatalogPageView, CatalogViewService, CatalogViewSource,
    RoutingFlags, SelectOption,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cached catalog views
    pub views: CachedCatalogViewService,
    /// Process-wide flag resolver
    pub flags: Arc<dyn FeatureFlags>,
    /// Page size applied when a request has none
    pub items_per_page: u32,
}

impl AppState {
    pub fn new(
        views: CachedCatalogViewService,
        flags: Arc<dyn FeatureFlags>,
        items_per_page: u32,
    ) -> Self {
        Self {
            views,
            flags,
            items_per_page,
        }
    }

    /// Wires the assembler, cache and flag resolver from configuration.
    ///
    /// `catalog` serves items, brands and types.
    pub fn from_config<C>(config: &Config, catalog: Arc<C>, flags: Arc<dyn FeatureFlags>) -> Self
    where
        C: CatalogItemRepository
            + ReadRepository<CatalogBrand>
            + ReadRepository<CatalogType>
            + 'static,
    {
        let assembler = CatalogViewService::new(
            catalog.clone(),
            catalog.clone(),
            catalog,
            Arc::new(CatalogUriComposer::new(config.catalog_base_url.clone())),
            flags.clone(),
        )
        .with_routing_flags(RoutingFlags::from_config(config))
        .with_repository_timeout(config.repository_timeout());

        let views = CachedCatalogViewService::with_window(
            Arc::new(assembler),
            config.cache_max_entries,
            config.cache_sliding_window(),
        );

        Self::new(views, flags, config.items_per_page)
    }
}

/// Handler for GET /catalog
///
/// Returns one page of the catalog, served from the view cache when possible.
/// Unparseable parameters are reported as `InvalidQuery`.
pub async fn catalog_handler(
    State(state): State<AppState>,
    params: std::result::Result<Query<CatalogQueryParams>, QueryRejection>,
) -> Result<Json<CatalogPageView>> {
    let Query(params) = params?;
    let query = params.into_listing_query(state.items_per_page)?;
    let view = state.views.catalog_page(&query).await?;
    Ok(Json(view))
}

/// Handler for GET /catalog/brands
pub async fn brands_handler(State(state): State<AppState>) -> Result<Json<Vec<SelectOption>>> {
    Ok(Json(state.views.brands().await?))
}

/// Handler for GET /catalog/types
pub async fn types_handler(State(state): State<AppState>) -> Result<Json<Vec<SelectOption>>> {
    Ok(Json(state.views.types().await?))
}

/// Handler for GET /flags
///
/// Returns every known flag; unknown flags are disabled and not listed.
pub async fn flags_handler(State(state): State<AppState>) -> Json<FlagsResponse> {
    Json(FlagsResponse {
        flags: state.flags.snapshot().await,
    })
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.views.cache();
    let stats = state.views.stats().await;
    let window = cache.store().read().await.sliding();
    let next_expiry = cache.next_expiry().await;
    Json(StatsResponse::new(&stats, window.as_secs()).with_next_expiry(next_expiry))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
