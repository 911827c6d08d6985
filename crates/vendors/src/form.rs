//! Admin form binding for vendors.
//!
//! Describes the editable surface (field order, labels, widgets), decodes the
//! submitted payload, validates it against the active validation groups and
//! writes it back onto a [`Vendor`] through the aggregate's own operations, so
//! channel and email links stay bidirectional.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use marketplace_core::{AggregateId, AggregateRoot, ChannelId, DomainError, Locale, Translation};

use crate::capability::SalesChannel;
use crate::email::{VendorEmail, VendorEmailId};
use crate::logo::LogoFile;
use crate::vendor::Vendor;

/// Widget used to render a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Checkbox,
    Number,
    Email,
    File,
    Translations,
    ChannelChoice { multiple: bool, expanded: bool },
    Collection { allow_add: bool, allow_delete: bool, by_reference: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind) -> FormField {
    FormField {
        name,
        label,
        kind,
        required: true,
    }
}

const fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> FormField {
    FormField {
        name,
        label,
        kind,
        required: false,
    }
}

/// A single failed constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// All violations found in one submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} invalid field(s): {}", .0.len(), summarize(.0))]
pub struct ValidationErrors(pub Vec<FieldViolation>);

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(value: ValidationErrors) -> Self {
        DomainError::validation(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorTranslationData {
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorEmailData {
    /// Existing entry to update; `None` adds a new one.
    #[serde(default)]
    pub id: Option<VendorEmailId>,
    pub value: String,
}

/// Submitted vendor form payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorFormData {
    pub name: Option<String>,
    pub slug: Option<String>,
    /// Unchecked checkboxes are not submitted.
    #[serde(default)]
    pub enabled: bool,
    pub phone: Option<String>,
    pub alt_phone: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    #[serde(default)]
    pub translations: BTreeMap<Locale, VendorTranslationData>,
    pub email: Option<String>,
    /// Empty on edit unless a new logo is uploaded.
    pub logo_file: Option<LogoFile>,
    #[serde(default)]
    pub channels: BTreeSet<ChannelId>,
    #[serde(default)]
    pub extra_emails: Vec<VendorEmailData>,
}

/// The vendor admin form type.
pub struct VendorForm;

impl VendorForm {
    pub const BLOCK_PREFIX: &'static str = "marketplace_vendor";

    /// Groups validated on every submission.
    pub const DEFAULT_GROUPS: &'static [&'static str] = &["marketplace"];

    /// Extra group active while the vendor has never been saved.
    pub const LOGO_CREATE_GROUP: &'static str = "logo_create";

    pub const FIELDS: [FormField; 12] = [
        field("name", "marketplace.ui.name", FieldKind::Text),
        field("slug", "marketplace_vendor.form.vendor.slug", FieldKind::Text),
        field("enabled", "marketplace.ui.enabled", FieldKind::Checkbox),
        field("phone", "marketplace_vendor.form.vendor.phone", FieldKind::Text),
        field("alt_phone", "marketplace_vendor.form.vendor.alt_phone", FieldKind::Text),
        field("lat", "marketplace_vendor.form.vendor.lat", FieldKind::Number),
        field("lon", "marketplace_vendor.form.vendor.lon", FieldKind::Number),
        field(
            "translations",
            "marketplace_vendor.form.vendor.translations",
            FieldKind::Translations,
        ),
        field("email", "marketplace_vendor.form.vendor.email", FieldKind::Email),
        field("logo_file", "marketplace_vendor.form.vendor.logo", FieldKind::File),
        optional(
            "channels",
            "marketplace_vendor.form.vendor.channels",
            FieldKind::ChannelChoice {
                multiple: true,
                expanded: true,
            },
        ),
        optional(
            "extra_emails",
            "marketplace_vendor.form.vendor.extra_emails",
            FieldKind::Collection {
                allow_add: true,
                allow_delete: true,
                by_reference: false,
            },
        ),
    ];

    /// Validation groups for a form bound to `vendor`.
    ///
    /// The logo is only mandatory when creating: no vendor bound yet, or one
    /// that has never been persisted.
    pub fn validation_groups(vendor: Option<&Vendor>) -> Vec<&'static str> {
        let mut groups = Self::DEFAULT_GROUPS.to_vec();
        if vendor.is_none_or(|v| v.is_new()) {
            groups.push(Self::LOGO_CREATE_GROUP);
        }
        groups
    }

    /// Pre-fill the form from an existing vendor.
    pub fn data_from(vendor: &Vendor) -> VendorFormData {
        VendorFormData {
            name: vendor.name().map(str::to_owned),
            slug: vendor.slug().map(str::to_owned),
            enabled: vendor.is_enabled(),
            phone: vendor.phone().map(str::to_owned),
            alt_phone: vendor.alt_phone().map(str::to_owned),
            lat: vendor.lat(),
            lon: vendor.lon(),
            translations: vendor
                .translations()
                .iter()
                .map(|t| {
                    (
                        t.locale().clone(),
                        VendorTranslationData {
                            description: t.description().map(str::to_owned),
                        },
                    )
                })
                .collect(),
            email: vendor.email().map(str::to_owned),
            logo_file: None,
            channels: vendor.channels().clone(),
            extra_emails: vendor
                .extra_emails()
                .iter()
                .map(|e| VendorEmailData {
                    id: Some(e.id_typed()),
                    value: e.value().to_owned(),
                })
                .collect(),
        }
    }

    /// Validate, then apply. `channels` is the full list of choosable channels;
    /// those not selected in `data` are unlinked.
    pub fn submit<C: SalesChannel>(
        data: &VendorFormData,
        vendor: &mut Vendor,
        channels: &mut [C],
        at: DateTime<Utc>,
    ) -> Result<(), ValidationErrors> {
        let groups = Self::validation_groups(Some(vendor));
        data.validate(&groups)?;
        data.apply(vendor, channels, at);
        Ok(())
    }
}

impl VendorFormData {
    pub fn validate(&self, groups: &[&str]) -> Result<(), ValidationErrors> {
        let mut violations = Vec::new();
        let mut violation = |field: &str, message: &str| {
            violations.push(FieldViolation {
                field: field.to_string(),
                message: message.to_string(),
            });
        };

        if groups.contains(&VendorForm::LOGO_CREATE_GROUP) && self.logo_file.is_none() {
            violation("logo_file", "a logo is required");
        }
        if let Some(logo) = &self.logo_file {
            if logo.mime_type().is_some() && !logo.is_image() {
                violation("logo_file", "the logo must be an image");
            }
        }

        if is_blank(self.name.as_deref()) {
            violation("name", "must not be blank");
        }
        match self.slug.as_deref() {
            None => violation("slug", "must not be blank"),
            Some(slug) if slug.trim().is_empty() => violation("slug", "must not be blank"),
            Some(slug) if !is_valid_slug(slug) => {
                violation("slug", "only lowercase letters, digits and dashes")
            }
            Some(_) => {}
        }

        if let Some(email) = self.email.as_deref() {
            if !is_valid_email(email) {
                violation("email", "not a valid email address");
            }
        }
        for (index, extra) in self.extra_emails.iter().enumerate() {
            if !is_valid_email(&extra.value) {
                violation(
                    &format!("extra_emails[{index}].value"),
                    "not a valid email address",
                );
            }
        }

        if self.lat.is_some_and(|lat| !(-90.0..=90.0).contains(&lat)) {
            violation("lat", "latitude must be within [-90, 90]");
        }
        if self.lon.is_some_and(|lon| !(-180.0..=180.0).contains(&lon)) {
            violation("lon", "longitude must be within [-180, 180]");
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(violations))
        }
    }

    /// Write the submitted values onto `vendor`. Does not validate.
    pub fn apply<C: SalesChannel>(&self, vendor: &mut Vendor, channels: &mut [C], at: DateTime<Utc>) {
        vendor.set_name(self.name.clone());
        vendor.set_slug(self.slug.clone());
        vendor.set_enabled(self.enabled);
        vendor.set_phone(self.phone.clone());
        vendor.set_alt_phone(self.alt_phone.clone());
        vendor.set_lat(self.lat);
        vendor.set_lon(self.lon);
        vendor.set_email(self.email.clone());

        for (locale, translation) in &self.translations {
            vendor.set_description(locale, translation.description.clone());
        }

        if let Some(logo) = &self.logo_file {
            vendor.set_logo_name(logo.original_name().map(str::to_owned));
            vendor.set_logo_file(Some(logo.clone()), at);
        }

        for channel in channels.iter_mut() {
            if self.channels.contains(&channel.channel_id()) {
                vendor.add_channel(channel);
            } else {
                vendor.remove_channel(channel);
            }
        }

        self.sync_extra_emails(vendor);
    }

    fn sync_extra_emails(&self, vendor: &mut Vendor) {
        let kept: BTreeSet<VendorEmailId> = self.extra_emails.iter().filter_map(|e| e.id).collect();
        let dropped: Vec<VendorEmailId> = vendor
            .extra_emails()
            .iter()
            .map(VendorEmail::id_typed)
            .filter(|id| !kept.contains(id))
            .collect();
        for id in dropped {
            vendor.remove_extra_email(id);
        }

        for submitted in &self.extra_emails {
            match submitted.id.and_then(|id| vendor.extra_email_mut(id)) {
                Some(existing) => existing.set_value(submitted.value.clone()),
                None => {
                    let id = submitted
                        .id
                        .unwrap_or_else(|| VendorEmailId::new(AggregateId::new()));
                    vendor.add_extra_email(VendorEmail::new(id, submitted.value.clone()));
                }
            }
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::ReciprocalChannel;
    use crate::vendor::VendorId;

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

    fn valid_data() -> VendorFormData {
        VendorFormData {
            name: Some("Acme Roasters".to_string()),
            slug: Some("acme-roasters".to_string()),
            enabled: true,
            email: Some("hello@acme.test".to_string()),
            logo_file: Some(LogoFile::new("/tmp/acme.png", 512).with_mime_type("image/png")),
            ..VendorFormData::default()
        }
    }

    #[test]
    fn fields_follow_declared_order() {
        let names: Vec<_> = VendorForm::FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(names.first(), Some(&"name"));
        assert_eq!(names.last(), Some(&"extra_emails"));
        assert!(!VendorForm::FIELDS.iter().find(|f| f.name == "channels").unwrap().required);
    }

    #[test]
    fn logo_group_only_applies_to_new_vendors() {
        let mut vendor = Vendor::new();
        assert!(VendorForm::validation_groups(None).contains(&VendorForm::LOGO_CREATE_GROUP));
        assert!(VendorForm::validation_groups(Some(&vendor)).contains(&VendorForm::LOGO_CREATE_GROUP));

        vendor.mark_persisted();
        assert_eq!(VendorForm::validation_groups(Some(&vendor)), VendorForm::DEFAULT_GROUPS.to_vec());
    }

    #[test]
    fn logo_required_on_create_only() {
        let data = VendorFormData {
            logo_file: None,
            ..valid_data()
        };

        let err = data.validate(&VendorForm::validation_groups(None)).unwrap_err();
        assert!(err.has_field("logo_file"));
        assert!(data.validate(VendorForm::DEFAULT_GROUPS).is_ok());
    }

    #[test]
    fn collects_every_violation() {
        let data = VendorFormData {
            name: Some("  ".to_string()),
            slug: Some("Bad Slug".to_string()),
            email: Some("nope".to_string()),
            lat: Some(91.0),
            lon: Some(-181.0),
            extra_emails: vec![VendorEmailData {
                id: None,
                value: "a@b".to_string(),
            }],
            ..valid_data()
        };

        let err = data.validate(VendorForm::DEFAULT_GROUPS).unwrap_err();
        for field in ["name", "slug", "email", "lat", "lon", "extra_emails[0].value"] {
            assert!(err.has_field(field), "missing violation for {field}");
        }
        assert!(matches!(DomainError::from(err), DomainError::Validation(_)));
    }

    #[test]
    fn non_image_logo_is_rejected() {
        let data = VendorFormData {
            logo_file: Some(LogoFile::new("/tmp/x.pdf", 10).with_mime_type("application/pdf")),
            ..valid_data()
        };
        assert!(data.validate(VendorForm::DEFAULT_GROUPS).unwrap_err().has_field("logo_file"));
    }

    #[test]
    fn submit_applies_fields_and_links_selected_channels() {
        let mut vendor = Vendor::new();
        let mut channels = vec![TestChannel::default(), TestChannel::default()];
        let en: Locale = "en_US".parse().unwrap();
        let mut data = valid_data();
        data.channels.insert(channels[0].id);
        data.translations.insert(
            en.clone(),
            VendorTranslationData {
                description: Some("Small batch coffee".to_string()),
            },
        );
        data.extra_emails.push(VendorEmailData {
            id: None,
            value: "orders@acme.test".to_string(),
        });
        let at = Utc::now();

        VendorForm::submit(&data, &mut vendor, &mut channels, at).unwrap();

        assert_eq!(vendor.name(), Some("Acme Roasters"));
        assert_eq!(vendor.description(&en), Some("Small batch coffee"));
        assert_eq!(vendor.updated_at(), Some(at));
        assert!(vendor.has_channel(&channels[0]));
        assert!(channels[0].has_vendor(vendor.id_typed()));
        assert!(!vendor.has_channel(&channels[1]));
        assert_eq!(vendor.extra_emails().len(), 1);
        assert_eq!(vendor.extra_emails()[0].vendor(), Some(vendor.id_typed()));
    }

    #[test]
    fn resubmission_unlinks_deselected_channels_and_deleted_emails() {
        let mut vendor = Vendor::new();
        let mut channels = vec![TestChannel::default()];
        let mut data = valid_data();
        data.channels.insert(channels[0].id);
        data.extra_emails.push(VendorEmailData {
            id: None,
            value: "orders@acme.test".to_string(),
        });
        VendorForm::submit(&data, &mut vendor, &mut channels, Utc::now()).unwrap();
        vendor.mark_persisted();

        let mut edit = VendorForm::data_from(&vendor);
        edit.channels.clear();
        edit.extra_emails.clear();
        VendorForm::submit(&edit, &mut vendor, &mut channels, Utc::now()).unwrap();

        assert!(vendor.channels().is_empty());
        assert!(!channels[0].has_vendor(vendor.id_typed()));
        assert!(vendor.extra_emails().is_empty());
    }

    #[test]
    fn uploaded_logo_name_is_stored_and_kept_on_edit() {
        let mut vendor = Vendor::new();
        let data = VendorFormData {
            logo_file: Some(
                LogoFile::new("/uploads/3f2a.png", 512)
                    .with_original_name("acme-logo.png")
                    .with_mime_type("image/png"),
            ),
            ..valid_data()
        };
        VendorForm::submit::<ChannelId>(&data, &mut vendor, &mut [], Utc::now()).unwrap();

        assert_eq!(vendor.logo_name(), Some("acme-logo.png"));
        assert_eq!(vendor.logo_file().unwrap().path(), std::path::Path::new("/uploads/3f2a.png"));

        vendor.mark_persisted();
        let edit = VendorForm::data_from(&vendor);
        assert_eq!(edit.logo_file, None);
        VendorForm::submit::<ChannelId>(&edit, &mut vendor, &mut [], Utc::now()).unwrap();
        assert_eq!(vendor.logo_name(), Some("acme-logo.png"));
    }

    #[test]
    fn existing_extra_email_is_updated_in_place() {
        let mut vendor = Vendor::new();
        let id = VendorEmailId::new(AggregateId::new());
        vendor.add_extra_email(VendorEmail::new(id, "old@acme.test"));
        vendor.mark_persisted();

        let mut edit = VendorForm::data_from(&vendor);
        edit.extra_emails[0].value = "new@acme.test".to_string();
        edit.apply::<ChannelId>(&mut vendor, &mut [], Utc::now());

        assert_eq!(vendor.extra_emails().len(), 1);
        assert_eq!(vendor.extra_emails()[0].id_typed(), id);
        assert_eq!(vendor.extra_emails()[0].value(), "new@acme.test");
    }

    #[test]
    fn payload_decodes_from_json() {
        let channel = ChannelId::new();
        let json = serde_json::json!({
            "name": "Acme",
            "slug": "acme",
            "translations": { "es_AR": { "description": "Tostadores" } },
            "channels": [channel.to_string()],
            "extra_emails": [{ "value": "a@acme.test" }]
        });

        let data: VendorFormData = serde_json::from_value(json).unwrap();
        assert!(!data.enabled);
        assert!(data.channels.contains(&channel));
        assert_eq!(data.extra_emails[0].id, None);
        assert_eq!(
            data.translations[&"es_AR".parse::<Locale>().unwrap()].description.as_deref(),
            Some("Tostadores")
        );
    }
}
