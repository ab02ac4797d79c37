//! Cache key derivation for catalog views.

use std::fmt;

use crate::catalog::ListingQuery;

// == Cache Key ==
/// Identity of a cached view.
///
/// Two keys are equal exactly when they describe the same logical request,
/// so different filter combinations never share an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Brands,
    Types,
    CatalogPage {
        page_index: u32,
        page_size: u32,
        brand_id: Option<u32>,
        type_id: Option<u32>,
    },
}

impl CacheKey {
    pub fn catalog_page(query: &ListingQuery) -> Self {
        CacheKey::CatalogPage {
            page_index: query.page_index,
            page_size: query.page_size,
            brand_id: query.brand_id,
            type_id: query.type_id,
        }
    }

    /// Short name of the cached view kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CacheKey::Brands => "brands",
            CacheKey::Types => "types",
            CacheKey::CatalogPage { .. } => "catalog-page",
        }
    }
}

fn fmt_filter(id: Option<u32>) -> String {
    id.map_or_else(|| "all".to_string(), |v| v.to_string())
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Brands | CacheKey::Types => f.write_str(self.kind()),
            CacheKey::CatalogPage {
                page_index,
                page_size,
                brand_id,
                type_id,
            } => write!(
                f,
                "items-{}-{}-{}-{}",
                page_index,
                page_size,
                fmt_filter(*brand_id),
                fmt_filter(*type_id)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_forms() {
        let query = ListingQuery::new(1, 10, Some(2), None).unwrap();

        assert_eq!(CacheKey::Brands.to_string(), "brands");
        assert_eq!(CacheKey::Types.to_string(), "types");
        assert_eq!(
            CacheKey::catalog_page(&query).to_string(),
            "items-1-10-2-all"
        );
    }

    #[test]
    fn test_brand_and_type_filters_do_not_collide() {
        let by_brand = ListingQuery::new(0, 10, Some(1), None).unwrap();
        let by_type = ListingQuery::new(0, 10, None, Some(1)).unwrap();

        assert_ne!(CacheKey::catalog_page(&by_brand), CacheKey::catalog_page(&by_type));
        assert_ne!(
            CacheKey::catalog_page(&by_brand).to_string(),
            CacheKey::catalog_page(&by_type).to_string()
        );
    }

    #[test]
    fn test_page_size_is_part_of_key() {
        let small = ListingQuery::new(0, 3, None, None).unwrap();
        let large = ListingQuery::new(0, 6, None, None).unwrap();

        assert_ne!(CacheKey::catalog_page(&small), CacheKey::catalog_page(&large));
    }
}
