//! Query specifications passed to the item repository.

use serde::{Deserialize, Serialize};

use super::model::CatalogItem;
use crate::error::{CatalogError, Result};

// == Listing Query ==
/// A validated catalog listing request.
///
/// Doubles as the identity of a cached catalog page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingQuery {
    pub page_index: u32,
    pub page_size: u32,
    pub brand_id: Option<u32>,
    pub type_id: Option<u32>,
}

impl ListingQuery {
    /// Validates raw caller input.
    ///
    /// Page indices past the last page are accepted; the resulting view is
    /// simply empty. Any positive page size is accepted; sizes beyond `u32`
    /// already cover every item and are saturated.
    pub fn new(
        page_index: i64,
        page_size: i64,
        brand_id: Option<u32>,
        type_id: Option<u32>,
    ) -> Result<Self> {
        if page_index < 0 {
            return Err(CatalogError::InvalidQuery(format!(
                "page index must not be negative, got {}",
                page_index
            )));
        }
        if page_size <= 0 {
            return Err(CatalogError::InvalidQuery(format!(
                "page size must be positive, got {}",
                page_size
            )));
        }
        let page_index = u32::try_from(page_index).map_err(|_| {
            CatalogError::InvalidQuery(format!("page index {} is out of range", page_index))
        })?;

        Ok(Self {
            page_index,
            page_size: u32::try_from(page_size).unwrap_or(u32::MAX),
            brand_id,
            type_id,
        })
    }

    /// Same filters and page, different page size.
    pub fn with_page_size(self, page_size: u32) -> Self {
        Self { page_size, ..self }
    }

    /// Count specification for this query's filters.
    pub fn filter(&self) -> CatalogFilter {
        CatalogFilter::new(self.brand_id, self.type_id)
    }

    /// List specification selecting this query's page.
    pub fn paginated(&self) -> CatalogFilterPaginated {
        CatalogFilterPaginated::new(
            u64::from(self.page_size) * u64::from(self.page_index),
            self.page_size,
            self.brand_id,
            self.type_id,
        )
    }
}

// == Filter Specification ==
/// Brand/type filter; `None` matches everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogFilter {
    pub brand_id: Option<u32>,
    pub type_id: Option<u32>,
}

impl CatalogFilter {
    pub fn new(brand_id: Option<u32>, type_id: Option<u32>) -> Self {
        Self { brand_id, type_id }
    }

    pub fn matches(&self, item: &CatalogItem) -> bool {
        self.brand_id.map_or(true, |b| item.catalog_brand_id == b)
            && self.type_id.map_or(true, |t| item.catalog_type_id == t)
    }
}

// == Paginated Specification ==
/// Filter plus offset/limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogFilterPaginated {
    pub skip: u64,
    pub take: u32,
    pub filter: CatalogFilter,
}

impl CatalogFilterPaginated {
    pub fn new(skip: u64, take: u32, brand_id: Option<u32>, type_id: Option<u32>) -> Self {
        Self {
            skip,
            take,
            filter: CatalogFilter::new(brand_id, type_id),
        }
    }
}
