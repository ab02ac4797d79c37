//! View models returned to the presentation layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// CSS class marking a pager link as disabled.
pub const DISABLED_MARKER: &str = "is-disabled";

/// One entry of a brand or type dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Identifier as text; `None` for the "All" entry
    pub value: Option<String>,
    pub text: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            value: Some(id.to_string()),
            text: text.into(),
            selected: false,
        }
    }

    /// The synthetic "All" entry heading every selector list.
    pub fn all() -> Self {
        Self {
            value: None,
            text: "All".to_string(),
            selected: true,
        }
    }
}

/// An item as shown on a catalog page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItemView {
    pub id: u32,
    pub name: String,
    pub picture_uri: String,
    pub price: Decimal,
}

// == Pagination Info ==
/// Pager state for a catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    /// Zero-based page index as requested; never clamped
    pub actual_page: u32,
    /// Page size the page was cut with
    pub items_per_page: u32,
    /// Items actually present on this page
    pub items_on_page: u32,
    pub total_items: u64,
    /// ceil(total_items / items_per_page)
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
    /// `is-disabled` when there is no next page, empty otherwise
    pub next: String,
    /// `is-disabled` on the first page, empty otherwise
    pub previous: String,
}

impl PaginationInfo {
    pub fn new(actual_page: u32, items_per_page: u32, items_on_page: u32, total_items: u64) -> Self {
        let total_pages = if items_per_page == 0 {
            0
        } else {
            total_items.div_ceil(u64::from(items_per_page))
        };
        // Also disables "next" on an empty catalog, where total_pages is 0
        let has_next = u64::from(actual_page) + 1 < total_pages;
        let has_previous = actual_page > 0;

        Self {
            actual_page,
            items_per_page,
            items_on_page,
            total_items,
            total_pages,
            has_next,
            has_previous,
            next: marker(has_next),
            previous: marker(has_previous),
        }
    }
}

impl Default for PaginationInfo {
    fn default() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

fn marker(enabled: bool) -> String {
    if enabled {
        String::new()
    } else {
        DISABLED_MARKER.to_string()
    }
}

// == Catalog Page View ==
/// Everything needed to render one catalog listing page.
///
/// The default value is the empty page shown when nothing could be cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogPageView {
    pub catalog_items: Vec<CatalogItemView>,
    /// All brands, regardless of the applied filter
    pub brands: Vec<SelectOption>,
    /// All types, regardless of the applied filter
    pub types: Vec<SelectOption>,
    pub brand_filter_applied: Option<u32>,
    pub types_filter_applied: Option<u32>,
    pub pagination_info: PaginationInfo,
}
