//! Aggregate root trait for marketplace domain models.

use crate::error::{DomainError, DomainResult};

/// Aggregate root marker + minimal interface.
///
/// Aggregates own their relationship sets and are handed to a persistence
/// collaborator as a whole. The version is bumped by that collaborator on every
/// successful save, so `0` means "never persisted".
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Number of times the aggregate has been persisted.
    fn version(&self) -> u64;

    /// Whether the aggregate has never been persisted.
    fn is_new(&self) -> bool {
        self.version() == 0
    }
}

/// Optimistic concurrency expectation for an aggregate.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExpectedVersion {
    /// Skip version checking (useful for imports, fixtures, etc.).
    Any,
    /// Require the stored aggregate to be at an exact version.
    Exact(u64),
}

impl ExpectedVersion {
    pub fn matches(self, actual: u64) -> bool {
        match self {
            ExpectedVersion::Any => true,
            ExpectedVersion::Exact(v) => v == actual,
        }
    }

    pub fn check(self, actual: u64) -> DomainResult<()> {
        if self.matches(actual) {
            Ok(())
        } else {
            Err(DomainError::conflict(format!(
                "optimistic concurrency check failed (expected: {self:?}, actual: {actual})"
            )))
        }
    }
}
