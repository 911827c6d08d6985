//! Vendor translation record.

use serde::{Deserialize, Serialize};

use marketplace_core::{Locale, Translation};

/// Locale-scoped vendor content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorTranslation {
    locale: Locale,
    description: Option<String>,
}

impl VendorTranslation {
    /// Empty translation for `locale`; this is the factory used for lazy creation.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            description: None,
        }
    }

    pub fn with_description(locale: Locale, description: impl Into<String>) -> Self {
        Self {
            locale,
            description: Some(description.into()),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }
}

impl Translation for VendorTranslation {
    fn locale(&self) -> &Locale {
        &self.locale
    }
}
