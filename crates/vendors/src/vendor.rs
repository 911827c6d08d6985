use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use marketplace_core::{
    AggregateId, AggregateRoot, ChannelId, DomainError, DomainResult, Locale, ProductId,
    Timestamps, Toggle, Translations,
};

use crate::capability::{CatalogProduct, SalesChannel};
use crate::email::{VendorEmail, VendorEmailId};
use crate::logo::LogoFile;
use crate::translation::VendorTranslation;

/// Vendor identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorId(pub AggregateId);

impl VendorId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for VendorId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for VendorId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<AggregateId>()
            .map(Self)
            .map_err(|_| DomainError::invalid_id(format!("VendorId: {s}")))
    }
}

/// Outcome of [`Vendor::add_product`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductAttachment {
    /// The product was already in this vendor's set.
    Unchanged,
    /// The product was added and had no other owner.
    Attached,
    /// The product was added but its back-reference named another vendor.
    ///
    /// `previous` still lists the product until it is detached there; use
    /// [`transfer_product`] when both vendors are loaded.
    Reassigned { previous: VendorId },
}

/// Aggregate root: Vendor (marketplace seller).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    id: VendorId,
    version: u64,
    name: Option<String>,
    slug: Option<String>,
    email: Option<String>,
    position: Option<i32>,
    phone: Option<String>,
    alt_phone: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    logo_file: Option<LogoFile>,
    logo_name: Option<String>,
    enabled: Toggle,
    timestamps: Timestamps,
    translations: Translations<VendorTranslation>,
    fallback_locale: Option<Locale>,
    channels: BTreeSet<ChannelId>,
    products: BTreeSet<ProductId>,
    extra_emails: Vec<VendorEmail>,
}

impl Vendor {
    /// Fresh, unsaved vendor created now.
    pub fn new() -> Self {
        Self::with_id(VendorId::new(AggregateId::new()), Utc::now())
    }

    /// Fresh, unsaved vendor with an explicit identity and creation time.
    pub fn with_id(id: VendorId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            version: 0,
            name: None,
            slug: None,
            email: None,
            position: None,
            phone: None,
            alt_phone: None,
            lat: Some(0.0),
            lon: Some(0.0),
            logo_file: None,
            logo_name: None,
            enabled: Toggle::default(),
            timestamps: Timestamps::new(created_at),
            translations: Translations::new(),
            fallback_locale: None,
            channels: BTreeSet::new(),
            products: BTreeSet::new(),
            extra_emails: Vec::new(),
        }
    }

    pub fn id_typed(&self) -> VendorId {
        self.id
    }

    /// Record a successful save. Called by the persistence collaborator only.
    pub fn mark_persisted(&mut self) -> u64 {
        self.version += 1;
        self.version
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    pub fn set_slug(&mut self, slug: Option<String>) {
        self.slug = slug;
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn set_email(&mut self, email: Option<String>) {
        self.email = email;
    }

    pub fn position(&self) -> Option<i32> {
        self.position
    }

    pub fn set_position(&mut self, position: Option<i32>) {
        self.position = position;
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn set_phone(&mut self, phone: Option<String>) {
        self.phone = phone;
    }

    pub fn alt_phone(&self) -> Option<&str> {
        self.alt_phone.as_deref()
    }

    pub fn set_alt_phone(&mut self, alt_phone: Option<String>) {
        self.alt_phone = alt_phone;
    }

    pub fn lat(&self) -> Option<f64> {
        self.lat
    }

    pub fn set_lat(&mut self, lat: Option<f64>) {
        self.lat = lat;
    }

    pub fn lon(&self) -> Option<f64> {
        self.lon
    }

    pub fn set_lon(&mut self, lon: Option<f64>) {
        self.lon = lon;
    }

    pub fn logo_file(&self) -> Option<&LogoFile> {
        self.logo_file.as_ref()
    }

    /// Replace the logo upload. Always touches `updated_at`.
    pub fn set_logo_file(&mut self, file: Option<LogoFile>, at: DateTime<Utc>) {
        self.logo_file = file;
        self.timestamps.touch(at);
    }

    pub fn logo_name(&self) -> Option<&str> {
        self.logo_name.as_deref()
    }

    pub fn set_logo_name(&mut self, logo_name: Option<String>) {
        self.logo_name = logo_name;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.is_enabled()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled.set_enabled(enabled);
    }

    pub fn enable(&mut self) {
        self.enabled.enable();
    }

    pub fn disable(&mut self) {
        self.enabled.disable();
    }

    pub fn toggle(&mut self) {
        self.enabled.toggle();
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.timestamps.created_at()
    }

    pub fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.timestamps.set_created_at(at);
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.timestamps.updated_at()
    }

    pub fn set_updated_at(&mut self, at: Option<DateTime<Utc>>) {
        self.timestamps.set_updated_at(at);
    }

    // ---- channels (many-to-many, symmetric) ----

    pub fn channels(&self) -> &BTreeSet<ChannelId> {
        &self.channels
    }

    pub fn has_channel<C: SalesChannel + ?Sized>(&self, channel: &C) -> bool {
        self.channels.contains(&channel.channel_id())
    }

    pub fn add_channel<C: SalesChannel + ?Sized>(&mut self, channel: &mut C) {
        let channel_id = channel.channel_id();
        if !self.channels.insert(channel_id) {
            return;
        }

        match channel.reciprocal() {
            Some(reciprocal) => {
                reciprocal.add_vendor(self.id);
                debug!(vendor_id = %self.id, channel_id = %channel_id, "vendor linked to channel");
            }
            None => {
                trace!(vendor_id = %self.id, channel_id = %channel_id, "channel keeps no vendor set");
            }
        }
    }

    pub fn remove_channel<C: SalesChannel + ?Sized>(&mut self, channel: &mut C) {
        let channel_id = channel.channel_id();
        if !self.channels.remove(&channel_id) {
            return;
        }

        if let Some(reciprocal) = channel.reciprocal() {
            reciprocal.remove_vendor(self.id);
            debug!(vendor_id = %self.id, channel_id = %channel_id, "vendor unlinked from channel");
        }
    }

    // ---- products (one vendor per product) ----

    pub fn products(&self) -> &BTreeSet<ProductId> {
        &self.products
    }

    pub fn has_product<P: CatalogProduct + ?Sized>(&self, product: &P) -> bool {
        self.products.contains(&product.product_id())
    }

    pub fn add_product<P: CatalogProduct + ?Sized>(&mut self, product: &mut P) -> ProductAttachment {
        let product_id = product.product_id();
        if !self.products.insert(product_id) {
            return ProductAttachment::Unchanged;
        }

        let Some(reciprocal) = product.reciprocal() else {
            trace!(vendor_id = %self.id, product_id = %product_id, "product keeps no vendor reference");
            return ProductAttachment::Attached;
        };

        let previous = reciprocal.vendor().filter(|owner| *owner != self.id);
        reciprocal.set_vendor(Some(self.id));
        debug!(vendor_id = %self.id, product_id = %product_id, "product attached to vendor");

        match previous {
            Some(previous) => ProductAttachment::Reassigned { previous },
            None => ProductAttachment::Attached,
        }
    }

    /// Detach `product`. The back-reference is cleared only while it still
    /// names this vendor; a product already handed to another vendor keeps it.
    pub fn remove_product<P: CatalogProduct + ?Sized>(&mut self, product: &mut P) {
        let product_id = product.product_id();
        if !self.products.remove(&product_id) {
            return;
        }

        if let Some(reciprocal) = product.reciprocal() {
            if reciprocal.vendor() == Some(self.id) {
                reciprocal.set_vendor(None);
            }
            debug!(vendor_id = %self.id, product_id = %product_id, "product detached from vendor");
        }
    }

    // ---- extra emails (owned) ----

    pub fn extra_emails(&self) -> &[VendorEmail] {
        &self.extra_emails
    }

    pub fn has_extra_email(&self, id: VendorEmailId) -> bool {
        self.extra_emails.iter().any(|e| e.id_typed() == id)
    }

    pub fn extra_email_mut(&mut self, id: VendorEmailId) -> Option<&mut VendorEmail> {
        self.extra_emails.iter_mut().find(|e| e.id_typed() == id)
    }

    /// Take ownership of `email`. No-op (and the argument is dropped) when an
    /// entry with the same id is already owned.
    pub fn add_extra_email(&mut self, mut email: VendorEmail) {
        if self.has_extra_email(email.id_typed()) {
            return;
        }
        email.set_vendor(Some(self.id));
        self.extra_emails.push(email);
    }

    /// Release the email with `id`, returning it with its back-reference cleared.
    ///
    /// Unlike [`Vendor::add_extra_email`], this takes the id: the vendor owns
    /// the entity, so callers only hold its id.
    pub fn remove_extra_email(&mut self, id: VendorEmailId) -> Option<VendorEmail> {
        let index = self.extra_emails.iter().position(|e| e.id_typed() == id)?;
        let mut email = self.extra_emails.remove(index);
        email.set_vendor(None);
        Some(email)
    }

    // ---- translations ----

    pub fn translations(&self) -> &Translations<VendorTranslation> {
        &self.translations
    }

    pub fn fallback_locale(&self) -> Option<&Locale> {
        self.fallback_locale.as_ref()
    }

    pub fn set_fallback_locale(&mut self, locale: Option<Locale>) {
        self.fallback_locale = locale;
    }

    /// Translation for `locale`, falling back to the fallback locale.
    pub fn translation(&self, locale: &Locale) -> DomainResult<&VendorTranslation> {
        self.translations
            .resolve(locale, self.fallback_locale.as_ref())
            .ok_or_else(|| DomainError::missing_translation(locale))
    }

    pub fn get_or_create_translation(&mut self, locale: &Locale) -> &mut VendorTranslation {
        self.translations.get_or_create(locale, VendorTranslation::new)
    }

    pub fn add_translation(&mut self, translation: VendorTranslation) -> Option<VendorTranslation> {
        self.translations.insert(translation)
    }

    pub fn remove_translation(&mut self, locale: &Locale) -> Option<VendorTranslation> {
        self.translations.remove(locale)
    }

    /// Description in `locale` (or the fallback locale). `None` when neither
    /// has a translation or the translation has no description.
    pub fn description(&self, locale: &Locale) -> Option<&str> {
        self.translation(locale).ok().and_then(|t| t.description())
    }

    /// Set the description for exactly `locale`, creating its translation if needed.
    pub fn set_description(&mut self, locale: &Locale, description: Option<String>) {
        self.get_or_create_translation(locale)
            .set_description(description);
    }
}

impl Default for Vendor {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregateRoot for Vendor {
    type Id = VendorId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Move `product` from `from` to `to`, keeping exactly one owner.
///
/// `from` is detached first so its `remove_product` does not clear the new
/// back-reference.
pub fn transfer_product<P: CatalogProduct + ?Sized>(
    from: &mut Vendor,
    to: &mut Vendor,
    product: &mut P,
) -> ProductAttachment {
    if from.id != to.id {
        from.remove_product(product);
    }
    to.add_product(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{ReciprocalChannel, ReciprocalProduct};
    use chrono::Duration;

    #[derive(Debug, Default)]
    struct TestChannel {
        id: ChannelId,
        vendors: BTreeSet<VendorId>,
    }

    impl SalesChannel for TestChannel {
        fn channel_id(&self) -> ChannelId {
            self.id
        }

        fn reciprocal(&mut self) -> Option<&mut dyn ReciprocalChannel> {
            Some(self)
        }
    }

    impl ReciprocalChannel for TestChannel {
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

    #[derive(Debug, Default)]
    struct TestProduct {
        id: ProductId,
        vendor: Option<VendorId>,
    }

    impl CatalogProduct for TestProduct {
        fn product_id(&self) -> ProductId {
            self.id
        }

        fn reciprocal(&mut self) -> Option<&mut dyn ReciprocalProduct> {
            Some(self)
        }
    }

    impl ReciprocalProduct for TestProduct {
        fn vendor(&self) -> Option<VendorId> {
            self.vendor
        }

        fn set_vendor(&mut self, vendor: Option<VendorId>) {
            self.vendor = vendor;
        }
    }

    fn test_email(value: &str) -> VendorEmail {
        VendorEmail::new(VendorEmailId::new(AggregateId::new()), value)
    }

    fn locale(code: &str) -> Locale {
        code.parse().unwrap()
    }

    #[test]
    fn fresh_vendor_has_empty_relationships_and_creation_time() {
        let before = Utc::now();
        let vendor = Vendor::new();

        assert!(vendor.channels().is_empty());
        assert!(vendor.products().is_empty());
        assert!(vendor.extra_emails().is_empty());
        assert!(vendor.is_enabled());
        assert!(vendor.is_new());
        assert!(vendor.created_at() >= before);
        assert_eq!(vendor.updated_at(), None);
        assert_eq!(vendor.lat(), Some(0.0));
        assert_eq!(vendor.lon(), Some(0.0));
    }

    #[test]
    fn mark_persisted_leaves_new_state() {
        let mut vendor = Vendor::new();
        assert_eq!(vendor.mark_persisted(), 1);
        assert!(!vendor.is_new());
    }

    #[test]
    fn add_channel_twice_is_idempotent() {
        let mut vendor = Vendor::new();
        let mut channel = TestChannel::default();

        vendor.add_channel(&mut channel);
        vendor.add_channel(&mut channel);

        assert!(vendor.has_channel(&channel));
        assert_eq!(vendor.channels().len(), 1);
        assert_eq!(channel.vendors.len(), 1);
    }

    #[test]
    fn channel_membership_is_symmetric() {
        let mut vendor = Vendor::new();
        let mut channel = TestChannel::default();

        vendor.add_channel(&mut channel);
        assert!(channel.has_vendor(vendor.id_typed()));

        vendor.remove_channel(&mut channel);
        assert!(!channel.has_vendor(vendor.id_typed()));
        assert!(!vendor.has_channel(&channel));
    }

    #[test]
    fn remove_channel_not_linked_is_noop() {
        let mut vendor = Vendor::new();
        let mut channel = TestChannel::default();
        channel.vendors.insert(vendor.id_typed());

        vendor.remove_channel(&mut channel);

        // No membership on the vendor side, so the channel is left alone.
        assert!(channel.has_vendor(vendor.id_typed()));
    }

    #[test]
    fn channel_without_capability_links_one_way() {
        let mut vendor = Vendor::new();
        let mut channel_id = ChannelId::new();

        vendor.add_channel(&mut channel_id);
        assert!(vendor.has_channel(&channel_id));

        vendor.remove_channel(&mut channel_id);
        assert!(!vendor.has_channel(&channel_id));
    }

    #[test]
    fn add_product_sets_back_reference() {
        let mut vendor = Vendor::new();
        let mut product = TestProduct::default();

        assert_eq!(vendor.add_product(&mut product), ProductAttachment::Attached);
        assert_eq!(product.vendor, Some(vendor.id_typed()));
        assert_eq!(vendor.add_product(&mut product), ProductAttachment::Unchanged);
        assert_eq!(vendor.products().len(), 1);

        vendor.remove_product(&mut product);
        assert_eq!(product.vendor, None);
        assert!(!vendor.has_product(&product));
    }

    #[test]
    fn add_product_owned_elsewhere_reports_previous_owner() {
        let mut v1 = Vendor::new();
        let mut v2 = Vendor::new();
        let mut product = TestProduct::default();

        v1.add_product(&mut product);
        let outcome = v2.add_product(&mut product);

        assert_eq!(
            outcome,
            ProductAttachment::Reassigned {
                previous: v1.id_typed()
            }
        );
        assert_eq!(product.vendor, Some(v2.id_typed()));

        // Stale membership on v1 must not clear v2's back-reference.
        v1.remove_product(&mut product);
        assert_eq!(product.vendor, Some(v2.id_typed()));
    }

    #[test]
    fn transfer_product_keeps_single_owner() {
        let mut v1 = Vendor::new();
        let mut v2 = Vendor::new();
        let mut product = TestProduct::default();

        v1.add_product(&mut product);
        let outcome = transfer_product(&mut v1, &mut v2, &mut product);

        assert_eq!(outcome, ProductAttachment::Attached);
        assert!(!v1.has_product(&product));
        assert!(v2.has_product(&product));
        assert_eq!(product.vendor, Some(v2.id_typed()));
    }

    #[test]
    fn transfer_to_same_vendor_is_unchanged() {
        let mut v1 = Vendor::new();
        let mut same = v1.clone();
        let mut product = TestProduct::default();
        v1.add_product(&mut product);
        same.add_product(&mut product);

        let outcome = transfer_product(&mut v1, &mut same, &mut product);
        assert_eq!(outcome, ProductAttachment::Unchanged);
        assert!(v1.has_product(&product));
    }

    #[test]
    fn extra_email_ownership_follows_add_and_remove() {
        let mut vendor = Vendor::new();
        let email = test_email("sales@example.com");
        let email_id = email.id_typed();

        vendor.add_extra_email(email.clone());
        vendor.add_extra_email(email);
        assert_eq!(vendor.extra_emails().len(), 1);
        assert_eq!(vendor.extra_emails()[0].vendor(), Some(vendor.id_typed()));

        let released = vendor.remove_extra_email(email_id).unwrap();
        assert_eq!(released.vendor(), None);
        assert!(!vendor.has_extra_email(email_id));
        assert!(vendor.remove_extra_email(email_id).is_none());
    }

    #[test]
    fn set_logo_file_touches_updated_at() {
        let created = Utc::now();
        let mut vendor = Vendor::with_id(VendorId::new(AggregateId::new()), created);
        let at = created + Duration::minutes(3);

        vendor.set_logo_file(Some(LogoFile::new("/uploads/logo.png", 2048)), at);

        assert_eq!(vendor.updated_at(), Some(at));
        assert_eq!(vendor.logo_file().unwrap().size(), 2048);
        assert_eq!(vendor.created_at(), created);
    }

    #[test]
    fn translation_missing_is_an_explicit_error() {
        let vendor = Vendor::new();
        let err = vendor.translation(&locale("en_US")).unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingTranslation {
                locale: "en_US".to_string()
            }
        );
        assert_eq!(vendor.description(&locale("en_US")), None);
    }

    #[test]
    fn set_description_creates_translation_lazily() {
        let mut vendor = Vendor::new();
        let en = locale("en_US");

        vendor.set_description(&en, Some("Handmade goods".to_string()));

        assert_eq!(vendor.translations().len(), 1);
        assert_eq!(vendor.description(&en), Some("Handmade goods"));
    }

    #[test]
    fn description_uses_fallback_locale() {
        let mut vendor = Vendor::new();
        let en = locale("en_US");
        let es = locale("es_AR");
        vendor.set_description(&en, Some("Coffee roaster".to_string()));

        assert_eq!(vendor.description(&es), None);
        vendor.set_fallback_locale(Some(en));
        assert_eq!(vendor.description(&es), Some("Coffee roaster"));
    }

    #[test]
    fn added_translation_can_be_removed() {
        let mut vendor = Vendor::new();
        let en = locale("en_US");
        let es = locale("es_AR");
        vendor.add_translation(VendorTranslation::with_description(en.clone(), "Coffee roaster"));
        vendor.add_translation(VendorTranslation::with_description(es.clone(), "Tostador"));
        vendor.set_fallback_locale(Some(en.clone()));

        let removed = vendor.remove_translation(&es).unwrap();
        assert_eq!(removed.description(), Some("Tostador"));
        assert_eq!(vendor.description(&es), Some("Coffee roaster"));
        assert!(vendor.remove_translation(&es).is_none());

        vendor.remove_translation(&en);
        assert!(vendor.translation(&es).is_err());
        assert!(vendor.translations().is_empty());
    }

    #[test]
    fn vendor_id_parse_reports_type() {
        let err = "xyz".parse::<VendorId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(msg) if msg.starts_with("VendorId")));
    }

    mod proptest_tests {
        use super::*;
        use proptest::num::f64 as float;
        use proptest::prelude::*;

        fn finite_f64() -> impl Strategy<Value = f64> {
            float::NORMAL | float::SUBNORMAL | float::ZERO | float::POSITIVE | float::NEGATIVE
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: any finite latitude/longitude, zero and subnormals
            /// included, is stored bit for bit.
            #[test]
            fn coordinates_round_trip(lat in finite_f64(), lon in finite_f64()) {
                let mut vendor = Vendor::new();
                vendor.set_lat(Some(lat));
                vendor.set_lon(Some(lon));
                prop_assert_eq!(vendor.lat().map(f64::to_bits), Some(lat.to_bits()));
                prop_assert_eq!(vendor.lon().map(f64::to_bits), Some(lon.to_bits()));
            }

            /// Property: toggling twice restores the enabled flag.
            #[test]
            fn double_toggle_is_identity(initial in any::<bool>()) {
                let mut vendor = Vendor::new();
                vendor.set_enabled(initial);
                vendor.toggle();
                vendor.toggle();
                prop_assert_eq!(vendor.is_enabled(), initial);
            }

            /// Property: any sequence of channel adds/removes keeps both sides equal.
            #[test]
            fn channel_sets_stay_symmetric(ops in proptest::collection::vec((0usize..4, any::<bool>()), 0..40)) {
                let mut vendor = Vendor::new();
                let mut channels: Vec<TestChannel> = (0..4).map(|_| TestChannel::default()).collect();

                for (index, add) in ops {
                    let channel = &mut channels[index];
                    if add {
                        vendor.add_channel(channel);
                    } else {
                        vendor.remove_channel(channel);
                    }
                }

                for channel in &channels {
                    prop_assert_eq!(vendor.has_channel(channel), channel.has_vendor(vendor.id_typed()));
                }
            }

            /// Property: after any add/remove sequence, a product's back-reference
            /// names this vendor exactly when the vendor lists the product.
            #[test]
            fn product_back_reference_matches_membership(ops in proptest::collection::vec((0usize..3, any::<bool>()), 0..40)) {
                let mut vendor = Vendor::new();
                let mut products: Vec<TestProduct> = (0..3).map(|_| TestProduct::default()).collect();

                for (index, add) in ops {
                    let product = &mut products[index];
                    if add {
                        vendor.add_product(product);
                    } else {
                        vendor.remove_product(product);
                    }
                }

                for product in &products {
                    let owned = product.vendor == Some(vendor.id_typed());
                    prop_assert_eq!(vendor.has_product(product), owned);
                }
            }
        }
    }
}
