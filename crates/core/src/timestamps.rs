//! Creation/update timestamps shared by persisted entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Timestampable mixin: `created_at` is fixed at construction, `updated_at` is
/// unset until the entity is first modified after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Timestamps {
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            updated_at: None,
        }
    }

    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
    }

    pub fn set_updated_at(&mut self, at: Option<DateTime<Utc>>) {
        self.updated_at = at;
    }

    /// Record a modification at `at`.
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }
}

impl Default for Timestamps {
    fn default() -> Self {
        Self::now()
    }
}

impl ValueObject for Timestamps {}
