//! API Routes
//!
//! Configures the Axum router with all catalog endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    brands_handler, catalog_handler, flags_handler, health_handler, stats_handler, types_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /catalog` - One catalog page (`page`, `page_size`, `brand`, `type`)
/// - `GET /catalog/brands` - Brand selector list
/// - `GET /catalog/types` - Type selector list
/// - `GET /flags` - Known feature flags
/// - `GET /stats` - View cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/catalog", get(catalog_handler))
        .route("/catalog/brands", get(brands_handler))
        .route("/catalog/types", get(types_handler))
        .route("/flags", get(flags_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
