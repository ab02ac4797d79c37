//! Repository and URI ports consumed by the view layer.
//!
//! Storage lives behind these traits; the view layer never knows whether it
//! talks to a database or to [`InMemoryCatalog`](super::InMemoryCatalog).

use async_trait::async_trait;

use super::model::CatalogItem;
use super::query::{CatalogFilter, CatalogFilterPaginated};
use crate::error::Result;

/// Read access to catalog items.
#[async_trait]
pub trait CatalogItemRepository: Send + Sync {
    /// Returns the page of items selected by `page`, ordered by id.
    async fn list(&self, page: &CatalogFilterPaginated) -> Result<Vec<CatalogItem>>;

    /// Counts every item matching `filter`, ignoring pagination.
    async fn count(&self, filter: &CatalogFilter) -> Result<u64>;
}

/// Unfiltered read access to a small lookup table (brands, types).
#[async_trait]
pub trait ReadRepository<T>: Send + Sync {
    async fn list_all(&self) -> Result<Vec<T>>;
}

/// Turns a stored picture reference into an absolute URI.
pub trait UriComposer: Send + Sync {
    fn compose_picture_uri(&self, raw: &str) -> String;
}
