//! Request DTOs for the catalog HTTP API

use serde::{Deserialize, Deserializer};

use crate::catalog::ListingQuery;
use crate::error::Result;

/// Query string of `GET /catalog`
///
/// # Fields
/// - `page`: zero-based page index (default 0)
/// - `page_size`: items per page (default from configuration)
/// - `brand` / `type`: optional filters; an empty value means "All"
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogQueryParams {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub page_size: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub brand: Option<u32>,
    #[serde(default, rename = "type", deserialize_with = "empty_as_none")]
    pub type_id: Option<u32>,
}

impl CatalogQueryParams {
    /// Validates the parameters into a listing query.
    pub fn into_listing_query(self, default_page_size: u32) -> Result<ListingQuery> {
        ListingQuery::new(
            self.page.unwrap_or(0),
            self.page_size.unwrap_or_else(|| i64::from(default_page_size)),
            self.brand,
            self.type_id,
        )
    }
}

/// The "All" selector entry submits an empty value.
fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use axum::extract::Query;
    use axum::http::Uri;

    fn parse(uri: &str) -> CatalogQueryParams {
        let uri: Uri = uri.parse().unwrap();
        Query::<CatalogQueryParams>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn test_defaults() {
        let query = parse("/catalog").into_listing_query(10).unwrap();

        assert_eq!(query.page_index, 0);
        assert_eq!(query.page_size, 10);
        assert!(query.brand_id.is_none());
        assert!(query.type_id.is_none());
    }

    #[test]
    fn test_all_fields() {
        let params = parse("/catalog?page=1&page_size=4&brand=2&type=3");
        let query = params.into_listing_query(10).unwrap();

        assert_eq!(query.page_index, 1);
        assert_eq!(query.page_size, 4);
        assert_eq!(query.brand_id, Some(2));
        assert_eq!(query.type_id, Some(3));
    }

    #[test]
    fn test_empty_filter_means_all() {
        let params = parse("/catalog?brand=&type=");
        assert!(params.brand.is_none());
        assert!(params.type_id.is_none());
    }

    #[test]
    fn test_garbage_filter_is_rejected() {
        let uri: Uri = "/catalog?brand=abc".parse().unwrap();
        assert!(Query::<CatalogQueryParams>::try_from_uri(&uri).is_err());
    }

    #[test]
    fn test_negative_page_is_invalid() {
        let result = parse("/catalog?page=-1").into_listing_query(10);
        assert!(matches!(result, Err(CatalogError::InvalidQuery(_))));
    }
}
