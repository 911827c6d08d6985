//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Relationship sets in this workspace test membership by identity, so every
/// entity that can sit in one exposes its identifier here.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
