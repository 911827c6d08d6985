use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use marketplace_core::{ChannelId, DomainError, DomainResult, Entity, Toggle};
use marketplace_vendors::{ReciprocalChannel, SalesChannel, VendorId};

/// A storefront the shop sells through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    id: ChannelId,
    code: String,
    name: String,
    enabled: Toggle,
    vendors: BTreeSet<VendorId>,
}

impl Channel {
    pub fn new(id: ChannelId, code: impl Into<String>, name: impl Into<String>) -> DomainResult<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DomainError::validation("channel code cannot be empty"));
        }

        Ok(Self {
            id,
            code,
            name: name.into(),
            enabled: Toggle::default(),
            vendors: BTreeSet::new(),
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.is_enabled()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled.set_enabled(enabled);
    }

    pub fn vendors(&self) -> &BTreeSet<VendorId> {
        &self.vendors
    }
}

impl Entity for Channel {
    type Id = ChannelId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl SalesChannel for Channel {
    fn channel_id(&self) -> ChannelId {
        self.id
    }

    fn reciprocal(&mut self) -> Option<&mut dyn ReciprocalChannel> {
        Some(self)
    }
}

impl ReciprocalChannel for Channel {
    fn add_vendor(&mut self, vendor: VendorId) {
        self.vendors.insert(vendor);
    }

    fn remove_vendor(&mut self, vendor: VendorId) {
        self.vendors.remove(&vendor);
    }

    fn has_vendor(&self, vendor: VendorId) -> bool {
        self.vendors.contains(&vendor)
    }
}
