//! Views Module
//!
//! UI-shaped projections of catalog data: selector lists and paginated
//! catalog pages, plus a caching decorator around the assembler.

mod assembler;
mod cached;
mod model;
mod routing;
mod selectors;

#[cfg(test)]
mod property_tests;

use async_trait::async_trait;

use crate::catalog::ListingQuery;
use crate::error::Result;

pub use assembler::CatalogViewService;
pub use cached::{CachedCatalogViewService, CachedView};
pub use model::{CatalogItemView, CatalogPageView, PaginationInfo, SelectOption, DISABLED_MARKER};
pub use routing::{PageRoute, RoutingFlags, BUCKET_PAGE_SIZE, SMALL_PAGE_SIZE};
pub use selectors::build_select_list;

/// Anything that can produce catalog views.
#[async_trait]
pub trait CatalogViewSource: Send + Sync {
    /// Brand selector list, "All" first.
    async fn brands(&self) -> Result<Vec<SelectOption>>;

    /// Type selector list, "All" first.
    async fn types(&self) -> Result<Vec<SelectOption>>;

    /// One page of the catalog for `query`.
    async fn catalog_page(&self, query: &ListingQuery) -> Result<CatalogPageView>;
}
