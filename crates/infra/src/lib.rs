//! Infrastructure layer: in-memory persistence and query collaborators, config.

pub mod config;
pub mod ownership;
pub mod product_lookup;
pub mod read_model;

pub use config::CatalogConfig;
pub use ownership::ProductOwnership;
pub use product_lookup::InMemoryProductLookup;
pub use read_model::{InMemoryVendorRepository, VendorRepository};
