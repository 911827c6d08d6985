//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**; two instances with the same attribute
/// values are interchangeable. In this workspace the timestamp, toggle, locale
/// and logo types are value objects, while vendors, channels, products and
/// vendor emails are entities compared by id.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct GeoPoint { lat: f64, lon: f64 }
///
/// impl ValueObject for GeoPoint {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
