//! Caching decorator around a [`CatalogViewSource`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use super::model::{CatalogPageView, SelectOption};
use super::CatalogViewSource;
use crate::cache::{CacheKey, CacheStats, ViewCache};
use crate::catalog::ListingQuery;
use crate::error::Result;

/// Values held by the view cache.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedView {
    Selectors(Vec<SelectOption>),
    Page(Box<CatalogPageView>),
}

impl CachedView {
    pub fn into_selectors(self) -> Option<Vec<SelectOption>> {
        match self {
            CachedView::Selectors(options) => Some(options),
            CachedView::Page(_) => None,
        }
    }

    pub fn into_page(self) -> Option<CatalogPageView> {
        match self {
            CachedView::Page(page) => Some(*page),
            CachedView::Selectors(_) => None,
        }
    }
}

// == Cached Catalog View Service ==
/// Serves views from a sliding-expiration cache, delegating misses.
#[derive(Clone)]
pub struct CachedCatalogViewService {
    inner: Arc<dyn CatalogViewSource>,
    cache: ViewCache<CachedView>,
}

impl CachedCatalogViewService {
    pub fn new(inner: Arc<dyn CatalogViewSource>, cache: ViewCache<CachedView>) -> Self {
        Self { inner, cache }
    }

    /// Builds a private cache with the given bounds.
    pub fn with_window(
        inner: Arc<dyn CatalogViewSource>,
        max_entries: usize,
        sliding: Duration,
    ) -> Self {
        Self::new(inner, ViewCache::new(max_entries, sliding))
    }

    /// The cache backing this service, for sweeping and inspection.
    pub fn cache(&self) -> &ViewCache<CachedView> {
        &self.cache
    }

    pub async fn stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    async fn cached_selectors(&self, key: CacheKey) -> Result<Vec<SelectOption>> {
        let inner = Arc::clone(&self.inner);
        let view = self
            .cache
            .get_or_build(key, || async move {
                let options = match key {
                    CacheKey::Types => inner.types().await?,
                    _ => inner.brands().await?,
                };
                Ok(CachedView::Selectors(options))
            })
            .await?;

        match view.into_selectors() {
            Some(options) => Ok(options),
            None => {
                warn!(key = %key, "cached value has the wrong shape, serving empty list");
                self.cache.invalidate(&key).await;
                Ok(Vec::new())
            }
        }
    }
}

#[async_trait]
impl CatalogViewSource for CachedCatalogViewService {
    async fn brands(&self) -> Result<Vec<SelectOption>> {
        self.cached_selectors(CacheKey::Brands).await
    }

    async fn types(&self) -> Result<Vec<SelectOption>> {
        self.cached_selectors(CacheKey::Types).await
    }

    async fn catalog_page(&self, query: &ListingQuery) -> Result<CatalogPageView> {
        let key = CacheKey::catalog_page(query);
        let inner = Arc::clone(&self.inner);
        let query = *query;

        let view = self
            .cache
            .get_or_build(key, || async move {
                let page = inner.catalog_page(&query).await?;
                Ok(CachedView::Page(Box::new(page)))
            })
            .await?;

        match view.into_page() {
            Some(page) => Ok(page),
            None => {
                warn!(key = %key, "cached value has the wrong shape, serving empty page");
                self.cache.invalidate(&key).await;
                Ok(CatalogPageView::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogUriComposer, InMemoryCatalog};
    use crate::error::CatalogError;
    use crate::flags::StaticFlags;
    use crate::views::CatalogViewService;

    const WINDOW: Duration = Duration::from_secs(30);

    fn cached_service(catalog: Arc<InMemoryCatalog>) -> CachedCatalogViewService {
        let inner = CatalogViewService::new(
            catalog.clone(),
            catalog.clone(),
            catalog,
            Arc::new(CatalogUriComposer::new("https://shop.test")),
            Arc::new(StaticFlags::none()),
        );
        CachedCatalogViewService::with_window(Arc::new(inner), 100, WINDOW)
    }

    #[tokio::test(start_paused = true)]
    async fn test_identical_queries_hit_the_repository_once() {
        let catalog = Arc::new(InMemoryCatalog::seeded());
        let service = cached_service(catalog.clone());
        let query = ListingQuery::new(0, 10, Some(2), None).unwrap();

        let first = service.catalog_page(&query).await.unwrap();
        let second = service.catalog_page(&query).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(catalog.count_calls(), 1);
        assert_eq!(catalog.list_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_distinct_filters_are_cached_separately() {
        let catalog = Arc::new(InMemoryCatalog::seeded());
        let service = cached_service(catalog.clone());

        let by_brand = ListingQuery::new(0, 10, Some(2), None).unwrap();
        let by_type = ListingQuery::new(0, 10, None, Some(2)).unwrap();

        let a = service.catalog_page(&by_brand).await.unwrap();
        let b = service.catalog_page(&by_type).await.unwrap();

        assert_eq!(a.pagination_info.total_items, 6);
        assert_eq!(b.pagination_info.total_items, 7);
        assert_eq!(catalog.count_calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_view_served_until_window_elapses() {
        let catalog = Arc::new(InMemoryCatalog::seeded());
        let service = cached_service(catalog.clone());
        let query = ListingQuery::new(0, 10, None, None).unwrap();

        service.catalog_page(&query).await.unwrap();
        catalog.replace_items(Vec::new()).await;

        // No invalidation: the cached page still shows 12 items
        let cached = service.catalog_page(&query).await.unwrap();
        assert_eq!(cached.pagination_info.total_items, 12);

        tokio::time::advance(WINDOW + Duration::from_secs(1)).await;
        let fresh = service.catalog_page(&query).await.unwrap();
        assert_eq!(fresh.pagination_info.total_items, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_is_not_cached() {
        let catalog = Arc::new(InMemoryCatalog::seeded());
        let service = cached_service(catalog.clone());

        catalog.set_failing(true);
        let result = service.brands().await;
        assert!(matches!(result, Err(CatalogError::DataUnavailable(_))));

        catalog.set_failing(false);
        let brands = service.brands().await.unwrap();
        assert_eq!(brands.len(), 6);
        assert_eq!(brands[0], SelectOption::all());
    }

    #[tokio::test(start_paused = true)]
    async fn test_brands_and_types_use_separate_entries() {
        let catalog = Arc::new(InMemoryCatalog::seeded());
        let service = cached_service(catalog);

        let brands = service.brands().await.unwrap();
        let types = service.types().await.unwrap();

        assert_eq!(brands[1].text, ".NET");
        assert_eq!(types[1].text, "Mug");
        assert_eq!(service.stats().await.total_entries, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_shape_degrades_to_empty_view() {
        let catalog = Arc::new(InMemoryCatalog::seeded());
        let service = cached_service(catalog);
        let query = ListingQuery::new(0, 10, None, None).unwrap();

        service
            .cache()
            .store()
            .write()
            .await
            .insert(CacheKey::catalog_page(&query), CachedView::Selectors(Vec::new()));

        let view = service.catalog_page(&query).await.unwrap();
        assert_eq!(view, CatalogPageView::default());

        // The bad entry was dropped; the next request rebuilds the real page
        let rebuilt = service.catalog_page(&query).await.unwrap();
        assert_eq!(rebuilt.pagination_info.total_items, 12);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_shape_selectors_are_rebuilt() {
        let catalog = Arc::new(InMemoryCatalog::seeded());
        let service = cached_service(catalog);
        let query = ListingQuery::new(0, 10, None, None).unwrap();
        let page = service.catalog_page(&query).await.unwrap();

        service
            .cache()
            .store()
            .write()
            .await
            .insert(CacheKey::Types, CachedView::Page(Box::new(page)));

        assert!(service.types().await.unwrap().is_empty());
        assert_eq!(service.types().await.unwrap()[1].text, "Mug");
    }
}
