//! Error types for the catalog view service
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Catalog Error Enum ==
/// Unified error type for the catalog view service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Repository or store failure, including timeouts
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// Negative page index, non-positive or oversized page size
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Toggle service could not be reached or answered garbage.
    ///
    /// Never surfaced by flag lookups; those degrade to "disabled".
    #[error("Flag service unavailable: {0}")]
    FlagServiceUnavailable(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            CatalogError::DataUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            CatalogError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            CatalogError::FlagServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            CatalogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Query Rejection ==
/// Malformed query strings (e.g. `page=abc`) answer with the same JSON body
/// as other invalid queries.
impl From<QueryRejection> for CatalogError {
    fn from(rejection: QueryRejection) -> Self {
        CatalogError::InvalidQuery(rejection.body_text())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the catalog view service.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                CatalogError::DataUnavailable("db".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                CatalogError::InvalidQuery("page".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                CatalogError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_query_rejection_is_invalid_query() {
        use axum::extract::Query;
        use std::collections::HashMap;

        let uri: axum::http::Uri = "/catalog?page=abc".parse().unwrap();
        let rejection = Query::<HashMap<String, i64>>::try_from_uri(&uri).unwrap_err();

        let err = CatalogError::from(rejection);
        assert!(matches!(err, CatalogError::InvalidQuery(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_display_includes_context() {
        let err = CatalogError::InvalidQuery("page size must be positive".into());
        assert_eq!(err.to_string(), "Invalid query: page size must be positive");
    }
}
