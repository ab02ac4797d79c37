//! In-memory catalog adapter.
//!
//! Backs the binary's demo catalog and the test suites. Implements every
//! repository port over one shared snapshot.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use super::model::{CatalogBrand, CatalogItem, CatalogType};
use super::ports::{CatalogItemRepository, ReadRepository};
use super::query::{CatalogFilter, CatalogFilterPaginated};
use super::uri::PICTURE_BASE_PLACEHOLDER;
use crate::error::{CatalogError, Result};

#[derive(Debug, Default)]
struct Tables {
    items: Vec<CatalogItem>,
    brands: Vec<CatalogBrand>,
    types: Vec<CatalogType>,
}

// == In-Memory Catalog ==
/// Thread-safe in-memory catalog store.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    tables: RwLock<Tables>,
    /// When set, every read fails with `DataUnavailable`
    failing: AtomicBool,
    /// Artificial delay applied to each read, in milliseconds
    latency_ms: AtomicU64,
    list_calls: AtomicUsize,
    count_calls: AtomicUsize,
}

impl InMemoryCatalog {
    // == Constructors ==
    /// Creates a catalog from explicit tables. Items are kept ordered by id.
    pub fn new(
        mut items: Vec<CatalogItem>,
        brands: Vec<CatalogBrand>,
        types: Vec<CatalogType>,
    ) -> Self {
        items.sort_by_key(|i| i.id);
        Self {
            tables: RwLock::new(Tables {
                items,
                brands,
                types,
            }),
            ..Self::default()
        }
    }

    /// Demo catalog: 5 brands, 4 types, 12 items.
    pub fn seeded() -> Self {
        let brands = vec![
            CatalogBrand::new(1, "Azure"),
            CatalogBrand::new(2, ".NET"),
            CatalogBrand::new(3, "Visual Studio"),
            CatalogBrand::new(4, "SQL Server"),
            CatalogBrand::new(5, "Other"),
        ];
        let types = vec![
            CatalogType::new(1, "Mug"),
            CatalogType::new(2, "T-Shirt"),
            CatalogType::new(3, "Sheet"),
            CatalogType::new(4, "USB Memory Stick"),
        ];

        // (type, brand, name, price in cents)
        let rows: [(u32, u32, &str, i64); 12] = [
            (2, 2, ".NET Bot Black Sweatshirt", 1950),
            (1, 2, ".NET Black & White Mug", 850),
            (2, 5, "Prism White T-Shirt", 1200),
            (2, 2, ".NET Foundation Sweatshirt", 1200),
            (3, 5, "Roslyn Red Sheet", 850),
            (2, 2, ".NET Blue Sweatshirt", 1200),
            (2, 5, "Roslyn Red T-Shirt", 1200),
            (2, 5, "Kudu Purple Sweatshirt", 850),
            (1, 5, "Cup<T> White Mug", 1200),
            (3, 2, ".NET Foundation Sheet", 1200),
            (3, 2, "Cup<T> Sheet", 850),
            (2, 5, "Prism White TShirt", 1200),
        ];

        let items = rows
            .iter()
            .zip(1u32..)
            .map(|(&(type_id, brand_id, name, cents), id)| CatalogItem {
                id,
                name: name.to_string(),
                description: name.to_string(),
                price: Decimal::new(cents, 2),
                picture_uri: format!("{}/images/products/{}.png", PICTURE_BASE_PLACEHOLDER, id),
                catalog_brand_id: brand_id,
                catalog_type_id: type_id,
            })
            .collect();

        Self::new(items, brands, types)
    }

    // == Test Controls ==
    /// Makes every subsequent read fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Delays every subsequent read by `latency`.
    pub fn set_latency(&self, latency: Duration) {
        self.latency_ms
            .store(latency.as_millis() as u64, Ordering::SeqCst);
    }

    /// Number of item page reads served so far.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Number of item count reads served so far.
    pub fn count_calls(&self) -> usize {
        self.count_calls.load(Ordering::SeqCst)
    }

    /// Replaces the item table, e.g. to grow or shrink the catalog in tests.
    pub async fn replace_items(&self, mut items: Vec<CatalogItem>) {
        items.sort_by_key(|i| i.id);
        self.tables.write().await.items = items;
    }

    async fn before_read(&self) -> Result<()> {
        let latency = self.latency_ms.load(Ordering::SeqCst);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(CatalogError::DataUnavailable(
                "in-memory catalog is offline".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogItemRepository for InMemoryCatalog {
    async fn list(&self, page: &CatalogFilterPaginated) -> Result<Vec<CatalogItem>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.before_read().await?;

        let tables = self.tables.read().await;
        let skip = usize::try_from(page.skip).unwrap_or(usize::MAX);
        Ok(tables
            .items
            .iter()
            .filter(|item| page.filter.matches(item))
            .skip(skip)
            .take(page.take as usize)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &CatalogFilter) -> Result<u64> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        self.before_read().await?;

        let tables = self.tables.read().await;
        Ok(tables.items.iter().filter(|item| filter.matches(item)).count() as u64)
    }
}

#[async_trait]
impl ReadRepository<CatalogBrand> for InMemoryCatalog {
    async fn list_all(&self) -> Result<Vec<CatalogBrand>> {
        self.before_read().await?;
        Ok(self.tables.read().await.brands.clone())
    }
}

#[async_trait]
impl ReadRepository<CatalogType> for InMemoryCatalog {
    async fn list_all(&self) -> Result<Vec<CatalogType>> {
        self.before_read().await?;
        Ok(self.tables.read().await.types.clone())
    }
}
