//! Catalog Module
//!
//! Domain entities, query specifications and the repository ports the
//! view layer reads through, plus an in-memory adapter.

mod memory;
mod model;
mod ports;
mod query;
mod uri;

pub use memory::InMemoryCatalog;
pub use model::{CatalogBrand, CatalogItem, CatalogType};
pub use ports::{CatalogItemRepository, ReadRepository, UriComposer};
pub use query::{CatalogFilter, CatalogFilterPaginated, ListingQuery};
pub use uri::{CatalogUriComposer, PICTURE_BASE_PLACEHOLDER};
