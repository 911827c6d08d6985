//! `marketplace-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, the error model, and the small mixins (timestamps, toggles,
//! translations) that marketplace entities compose instead of inheriting.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod locale;
pub mod timestamps;
pub mod toggle;
pub mod translation;
pub mod value_object;

pub use aggregate::{AggregateRoot, ExpectedVersion};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{AggregateId, ChannelId, ProductId};
pub use locale::Locale;
pub use timestamps::Timestamps;
pub use toggle::Toggle;
pub use translation::{Translation, Translations};
pub use value_object::ValueObject;
