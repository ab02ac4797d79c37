//! Catalog view assembly.
//!
//! UI-specific service: reads repositories, consults the routing flags and
//! projects the results into view models. Holds no business rules.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use super::model::{CatalogItemView, CatalogPageView, PaginationInfo, SelectOption};
use super::routing::{PageRoute, RoutingFlags};
use super::selectors::build_select_list;
use super::CatalogViewSource;
use crate::catalog::{
    CatalogBrand, CatalogItem, CatalogItemRepository, CatalogType, ListingQuery, ReadRepository,
    UriComposer,
};
use crate::error::{CatalogError, Result};
use crate::flags::FeatureFlags;

const DEFAULT_REPOSITORY_TIMEOUT: Duration = Duration::from_secs(5);

// == Catalog View Service ==
pub struct CatalogViewService {
    items: Arc<dyn CatalogItemRepository>,
    brands: Arc<dyn ReadRepository<CatalogBrand>>,
    types: Arc<dyn ReadRepository<CatalogType>>,
    uri_composer: Arc<dyn UriComposer>,
    flags: Arc<dyn FeatureFlags>,
    routing: RoutingFlags,
    repository_timeout: Duration,
}

impl CatalogViewService {
    pub fn new(
        items: Arc<dyn CatalogItemRepository>,
        brands: Arc<dyn ReadRepository<CatalogBrand>>,
        types: Arc<dyn ReadRepository<CatalogType>>,
        uri_composer: Arc<dyn UriComposer>,
        flags: Arc<dyn FeatureFlags>,
    ) -> Self {
        Self {
            items,
            brands,
            types,
            uri_composer,
            flags,
            routing: RoutingFlags::default(),
            repository_timeout: DEFAULT_REPOSITORY_TIMEOUT,
        }
    }

    pub fn with_routing_flags(mut self, routing: RoutingFlags) -> Self {
        self.routing = routing;
        self
    }

    pub fn with_repository_timeout(mut self, timeout: Duration) -> Self {
        self.repository_timeout = timeout;
        self
    }

    // == Build Page ==
    /// Assembles one catalog page.
    ///
    /// Counts matching items first, picks the page route from that count,
    /// then fetches the page and both selector lists concurrently.
    pub async fn build_page(&self, query: &ListingQuery) -> Result<CatalogPageView> {
        info!(
            page = query.page_index,
            page_size = query.page_size,
            brand_id = ?query.brand_id,
            type_id = ?query.type_id,
            "building catalog page"
        );

        let total_items = self.bounded(self.items.count(&query.filter())).await?;

        let route = self.routing.resolve(self.flags.as_ref(), total_items).await;
        if route != PageRoute::Default {
            debug!(?route, total_items, "page route overrides requested page size");
        }
        let effective = query.with_page_size(route.page_size(query.page_size));
        let page = effective.paginated();

        let (items_on_page, brands, types) = tokio::try_join!(
            self.bounded(self.items.list(&page)),
            self.list_brands(),
            self.list_types(),
        )?;

        let items_count = items_on_page.len() as u32;
        Ok(CatalogPageView {
            catalog_items: self.project(items_on_page),
            brands,
            types,
            brand_filter_applied: query.brand_id,
            types_filter_applied: query.type_id,
            pagination_info: PaginationInfo::new(
                effective.page_index,
                effective.page_size,
                items_count,
                total_items,
            ),
        })
    }

    // == Selector Lists ==
    /// Every brand, "All" first, sorted by name.
    pub async fn list_brands(&self) -> Result<Vec<SelectOption>> {
        debug!("listing brands");
        let brands = self.bounded(self.brands.list_all()).await?;
        Ok(build_select_list(brands.into_iter().map(|b| (b.id, b.brand))))
    }

    /// Every type, "All" first, sorted by name.
    pub async fn list_types(&self) -> Result<Vec<SelectOption>> {
        debug!("listing types");
        let types = self.bounded(self.types.list_all()).await?;
        Ok(build_select_list(types.into_iter().map(|t| (t.id, t.kind))))
    }

    fn project(&self, items: Vec<CatalogItem>) -> Vec<CatalogItemView> {
        items
            .into_iter()
            .map(|item| CatalogItemView {
                picture_uri: self.uri_composer.compose_picture_uri(&item.picture_uri),
                id: item.id,
                name: item.name,
                price: item.price,
            })
            .collect()
    }

    /// Applies the repository timeout to one call.
    async fn bounded<T, F>(&self, call: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::time::timeout(self.repository_timeout, call)
            .await
            .map_err(|_| {
                CatalogError::DataUnavailable(format!(
                    "repository call timed out after {:?}",
                    self.repository_timeout
                ))
            })?
    }
}

#[async_trait]
impl CatalogViewSource for CatalogViewService {
    async fn brands(&self) -> Result<Vec<SelectOption>> {
        self.list_brands().await
    }

    async fn types(&self) -> Result<Vec<SelectOption>> {
        self.list_types().await
    }

    async fn catalog_page(&self, query: &ListingQuery) -> Result<CatalogPageView> {
        self.build_page(query).await
    }
}
