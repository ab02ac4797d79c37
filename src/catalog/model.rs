//! Catalog entities as read from storage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sellable catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    /// Raw picture reference, composed into an absolute URI for display
    pub picture_uri: String,
    pub catalog_brand_id: u32,
    pub catalog_type_id: u32,
}

/// A brand items can be filtered by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogBrand {
    pub id: u32,
    pub brand: String,
}

/// A product type items can be filtered by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogType {
    pub id: u32,
    pub kind: String,
}

impl CatalogBrand {
    pub fn new(id: u32, brand: impl Into<String>) -> Self {
        Self {
            id,
            brand: brand.into(),
        }
    }
}

impl CatalogType {
    pub fn new(id: u32, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}
