//! Auxiliary vendor email addresses.

use serde::{Deserialize, Serialize};

use marketplace_core::{AggregateId, Entity};

use crate::vendor::VendorId;

/// VendorEmail identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorEmailId(pub AggregateId);

impl VendorEmailId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for VendorEmailId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// An extra contact address owned by exactly one vendor at a time.
///
/// The back-reference is written only by [`crate::Vendor::add_extra_email`] and
/// [`crate::Vendor::remove_extra_email`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorEmail {
    id: VendorEmailId,
    value: String,
    vendor: Option<VendorId>,
}

impl VendorEmail {
    pub fn new(id: VendorEmailId, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
            vendor: None,
        }
    }

    pub fn id_typed(&self) -> VendorEmailId {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn vendor(&self) -> Option<VendorId> {
        self.vendor
    }

    pub(crate) fn set_vendor(&mut self, vendor: Option<VendorId>) {
        self.vendor = vendor;
    }
}

impl Entity for VendorEmail {
    type Id = VendorEmailId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
