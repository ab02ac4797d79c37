//! API Module
//!
//! HTTP handlers and routing for the catalog views API.
//!
//! # Endpoints
//! - `GET /catalog` - One catalog page
//! - `GET /catalog/brands` - Brand selector list
//! - `GET /catalog/types` - Type selector list
//! - `GET /flags` - Known feature flags
//! - `GET /stats` - View cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
