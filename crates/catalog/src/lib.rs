//! Catalog entities owned by the host shop: sales channels and products.
//!
//! Both opt into the vendor reciprocal capabilities, so linking them from a
//! [`marketplace_vendors::Vendor`] keeps the reverse side in sync.

pub mod channel;
pub mod product;

pub use channel::Channel;
pub use product::{Product, ProductTranslation};
