//! Vendor persistence abstractions.

pub mod vendor_store;

pub use vendor_store::{InMemoryVendorRepository, VendorRepository};
