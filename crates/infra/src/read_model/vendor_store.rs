use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use tracing::debug;

use marketplace_core::{AggregateRoot, DomainError, DomainResult, ExpectedVersion, Locale};
use marketplace_vendors::{Vendor, VendorId};

use crate::config::CatalogConfig;

/// Vendor persistence collaborator.
///
/// `save` is the only place a vendor's version moves: it assigns persistent
/// identity on first save (version 0 → 1) and rejects stale copies.
pub trait VendorRepository: Send + Sync {
    fn get(&self, id: VendorId) -> Option<Vendor>;
    fn find_by_slug(&self, slug: &str) -> Option<Vendor>;
    /// All vendors ordered by position (unpositioned last), then name.
    fn list(&self) -> Vec<Vendor>;
    /// Persist `vendor`, updating its version and timestamps in place.
    fn save(&self, vendor: &mut Vendor, at: DateTime<Utc>) -> DomainResult<u64>;
    /// Remove a vendor together with its extra emails.
    fn delete(&self, id: VendorId) -> DomainResult<Vendor>;
}

impl<S> VendorRepository for Arc<S>
where
    S: VendorRepository + ?Sized,
{
    fn get(&self, id: VendorId) -> Option<Vendor> {
        (**self).get(id)
    }

    fn find_by_slug(&self, slug: &str) -> Option<Vendor> {
        (**self).find_by_slug(slug)
    }

    fn list(&self) -> Vec<Vendor> {
        (**self).list()
    }

    fn save(&self, vendor: &mut Vendor, at: DateTime<Utc>) -> DomainResult<u64> {
        (**self).save(vendor, at)
    }

    fn delete(&self, id: VendorId) -> DomainResult<Vendor> {
        (**self).delete(id)
    }
}

/// In-memory vendor store for tests/dev.
#[derive(Debug)]
pub struct InMemoryVendorRepository {
    inner: RwLock<HashMap<VendorId, Vendor>>,
    fallback_locale: Option<Locale>,
}

impl InMemoryVendorRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            fallback_locale: None,
        }
    }

    /// Store that assigns `config.fallback_locale` to vendors lacking one.
    pub fn with_config(config: &CatalogConfig) -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            fallback_locale: Some(config.fallback_locale.clone()),
        }
    }
}

impl Default for InMemoryVendorRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> DomainError {
    DomainError::invariant("vendor store lock poisoned")
}

impl VendorRepository for InMemoryVendorRepository {
    fn get(&self, id: VendorId) -> Option<Vendor> {
        let map = self.inner.read().ok()?;
        map.get(&id).cloned()
    }

    fn find_by_slug(&self, slug: &str) -> Option<Vendor> {
        let map = self.inner.read().ok()?;
        map.values().find(|v| v.slug() == Some(slug)).cloned()
    }

    fn list(&self) -> Vec<Vendor> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        let mut vendors: Vec<Vendor> = map.values().cloned().collect();
        vendors.sort_by(|a, b| {
            let pos = |v: &Vendor| (v.position().is_none(), v.position());
            pos(a)
                .cmp(&pos(b))
                .then_with(|| a.name().cmp(&b.name()))
        });
        vendors
    }

    fn save(&self, vendor: &mut Vendor, at: DateTime<Utc>) -> DomainResult<u64> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let id = vendor.id_typed();

        let stored_version = map.get(&id).map(|v| v.version()).unwrap_or(0);
        ExpectedVersion::Exact(vendor.version()).check(stored_version)?;

        if let Some(slug) = vendor.slug() {
            if map.values().any(|other| other.id_typed() != id && other.slug() == Some(slug)) {
                return Err(DomainError::conflict(format!("vendor slug already in use: {slug}")));
            }
        }

        if !vendor.is_new() {
            vendor.set_updated_at(Some(at));
        }
        if vendor.fallback_locale().is_none() {
            vendor.set_fallback_locale(self.fallback_locale.clone());
        }

        let version = vendor.mark_persisted();
        map.insert(id, vendor.clone());
        debug!(vendor_id = %id, version, "vendor saved");
        Ok(version)
    }

    fn delete(&self, id: VendorId) -> DomainResult<Vendor> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let vendor = map.get(&id).ok_or_else(DomainError::not_found)?;

        if !vendor.channels().is_empty() || !vendor.products().is_empty() {
            return Err(DomainError::conflict(format!(
                "vendor {id} is still linked to {} channel(s) and {} product(s)",
                vendor.channels().len(),
                vendor.products().len()
            )));
        }

        let removed = map.remove(&id).ok_or_else(DomainError::not_found)?;
        debug!(vendor_id = %id, extra_emails = removed.extra_emails().len(), "vendor deleted");
        Ok(removed)
    }
}
