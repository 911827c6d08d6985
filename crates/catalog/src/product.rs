use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use marketplace_core::{
    ChannelId, DomainError, DomainResult, Entity, Locale, ProductId, Timestamps, Toggle, Translation,
    Translations,
};
use marketplace_vendors::{CatalogProduct, ReciprocalProduct, VendorId};

/// Localized product content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTranslation {
    locale: Locale,
    name: String,
    slug: Option<String>,
}

impl ProductTranslation {
    pub fn new(locale: Locale, name: impl Into<String>) -> Self {
        Self {
            locale,
            name: name.into(),
            slug: None,
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }
}

impl Translation for ProductTranslation {
    fn locale(&self) -> &Locale {
        &self.locale
    }
}

/// A catalog product. Sold by at most one vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    code: String,
    enabled: Toggle,
    position: Option<i32>,
    timestamps: Timestamps,
    channels: BTreeSet<ChannelId>,
    translations: Translations<ProductTranslation>,
    vendor: Option<VendorId>,
}

impl Product {
    pub fn new(id: ProductId, code: impl Into<String>, created_at: DateTime<Utc>) -> DomainResult<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DomainError::validation("product code cannot be empty"));
        }

        Ok(Self {
            id,
            code,
            enabled: Toggle::default(),
            position: None,
            timestamps: Timestamps::new(created_at),
            channels: BTreeSet::new(),
            translations: Translations::new(),
            vendor: None,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.is_enabled()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled.set_enabled(enabled);
    }

    pub fn position(&self) -> Option<i32> {
        self.position
    }

    pub fn set_position(&mut self, position: Option<i32>) {
        self.position = position;
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.timestamps.created_at()
    }

    pub fn channels(&self) -> &BTreeSet<ChannelId> {
        &self.channels
    }

    pub fn add_channel(&mut self, channel: ChannelId) {
        self.channels.insert(channel);
    }

    pub fn remove_channel(&mut self, channel: ChannelId) {
        self.channels.remove(&channel);
    }

    pub fn has_channel(&self, channel: ChannelId) -> bool {
        self.channels.contains(&channel)
    }

    pub fn translation(&self, locale: &Locale) -> Option<&ProductTranslation> {
        self.translations.get(locale)
    }

    pub fn add_translation(&mut self, translation: ProductTranslation) {
        self.translations.insert(translation);
    }

    /// Owning vendor, if any.
    pub fn vendor_id(&self) -> Option<VendorId> {
        self.vendor
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl CatalogProduct for Product {
    fn product_id(&self) -> ProductId {
        self.id
    }

    fn reciprocal(&mut self) -> Option<&mut dyn ReciprocalProduct> {
        Some(self)
    }
}

impl ReciprocalProduct for Product {
    fn vendor(&self) -> Option<VendorId> {
        self.vendor
    }

    fn set_vendor(&mut self, vendor: Option<VendorId>) {
        self.vendor = vendor;
    }
}
