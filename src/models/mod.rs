//! Request and Response models for the catalog HTTP API
//!
//! DTOs used for deserializing query strings and serializing response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::CatalogQueryParams;
pub use responses::{ErrorResponse, FlagsResponse, HealthResponse, StatsResponse};
