//! Vendors domain module.
//!
//! A vendor is a marketplace seller: localized content, contact details, a
//! logo, and bidirectional links to sales channels, products and auxiliary
//! email addresses. Everything here is deterministic in-memory domain logic
//! (no IO, no HTTP, no storage); persistence and query execution are supplied
//! by host collaborators through the traits in [`capability`] and [`lookup`].

pub mod capability;
pub mod email;
pub mod form;
pub mod logo;
pub mod lookup;
pub mod translation;
pub mod vendor;

pub use capability::{CatalogProduct, ReciprocalChannel, ReciprocalProduct, SalesChannel};
pub use email::{VendorEmail, VendorEmailId};
pub use form::{
    FieldKind, FieldViolation, FormField, ValidationErrors, VendorEmailData, VendorForm, VendorFormData,
    VendorTranslationData,
};
pub use logo::LogoFile;
pub use lookup::{
    Page, ProductListQuery, ProductListing, ProductLookup, SortDirection, SortDirective, SortField,
};
pub use translation::VendorTranslation;
pub use vendor::{ProductAttachment, Vendor, VendorId, transfer_product};
