//! Reciprocal-reference capabilities for host entities.
//!
//! Channels and products belong to the host catalog. A vendor can link to any
//! of them, but the reverse side of the link is only maintained when the host
//! entity opts in by returning `Some` from `reciprocal()`. Entities that do not
//! opt in are linked one-directionally, which is not an error.

use marketplace_core::{ChannelId, ProductId};

use crate::vendor::VendorId;

/// A sales channel a vendor can be exposed through.
pub trait SalesChannel {
    fn channel_id(&self) -> ChannelId;

    /// Reciprocal vendor set, when this channel keeps one.
    fn reciprocal(&mut self) -> Option<&mut dyn ReciprocalChannel> {
        None
    }
}

/// Channel side of the vendor/channel many-to-many link.
pub trait ReciprocalChannel {
    fn add_vendor(&mut self, vendor: VendorId);
    fn remove_vendor(&mut self, vendor: VendorId);
    fn has_vendor(&self, vendor: VendorId) -> bool;
}

/// A catalog product a vendor can sell.
pub trait CatalogProduct {
    fn product_id(&self) -> ProductId;

    /// Vendor back-reference, when this product keeps one.
    fn reciprocal(&mut self) -> Option<&mut dyn ReciprocalProduct> {
        None
    }
}

/// Product side of the exclusive vendor/product link.
pub trait ReciprocalProduct {
    fn vendor(&self) -> Option<VendorId>;
    fn set_vendor(&mut self, vendor: Option<VendorId>);
}

/// A bare channel id is a channel without the reciprocal capability.
impl SalesChannel for ChannelId {
    fn channel_id(&self) -> ChannelId {
        *self
    }
}

/// A bare product id is a product without the reciprocal capability.
impl CatalogProduct for ProductId {
    fn product_id(&self) -> ProductId {
        *self
    }
}
