//! Catalog Views - presentation tier of a catalog storefront
//!
//! Assembles paginated catalog pages and brand/type selector lists from
//! repository reads, caches them with sliding expiration, and routes page
//! sizes through feature flags.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod flags;
pub mod models;
pub mod tasks;
pub mod views;

pub use api::AppState;
pub use config::Config;
pub use error::{CatalogError, Result};
pub use tasks::{spawn_cleanup_task, spawn_flag_refresh_task};
