//! One-vendor-per-product enforcement across stored vendors.

use chrono::{DateTime, Utc};
use tracing::debug;

use marketplace_core::{DomainError, DomainResult};
use marketplace_vendors::{CatalogProduct, ProductAttachment, ReciprocalProduct, VendorId};

use crate::read_model::VendorRepository;

/// Assigns products to vendors through a [`VendorRepository`], detaching the
/// product from whichever stored vendor listed it before.
///
/// Each vendor is saved separately; atomicity across those saves is the
/// host transaction's job.
#[derive(Debug, Clone)]
pub struct ProductOwnership<R> {
    repository: R,
}

impl<R: VendorRepository> ProductOwnership<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Make `vendor_id` the sole owner of `product`.
    ///
    /// When a save fails, `product`'s back-reference is restored to what it
    /// was on entry. Vendors saved before the failure stay saved.
    pub fn assign<P>(&self, vendor_id: VendorId, product: &mut P, at: DateTime<Utc>) -> DomainResult<ProductAttachment>
    where
        P: CatalogProduct + ?Sized,
    {
        let before = product.reciprocal().and_then(|r| r.vendor());
        let result = self.reassign(vendor_id, product, at);
        if result.is_err() {
            if let Some(reciprocal) = product.reciprocal() {
                reciprocal.set_vendor(before);
            }
        }
        result
    }

    fn reassign<P>(&self, vendor_id: VendorId, product: &mut P, at: DateTime<Utc>) -> DomainResult<ProductAttachment>
    where
        P: CatalogProduct + ?Sized,
    {
        let mut target = self.repository.get(vendor_id).ok_or_else(DomainError::not_found)?;

        for mut previous in self.repository.list() {
            if previous.id_typed() == vendor_id || !previous.has_product(product) {
                continue;
            }
            previous.remove_product(product);
            self.repository.save(&mut previous, at)?;
            debug!(
                from = %previous.id_typed(),
                to = %vendor_id,
                product_id = %product.product_id(),
                "product ownership transferred"
            );
        }

        let outcome = target.add_product(product);
        if outcome != ProductAttachment::Unchanged {
            self.repository.save(&mut target, at)?;
        }
        Ok(outcome)
    }

    /// Detach `product` from `vendor_id`.
    pub fn release<P>(&self, vendor_id: VendorId, product: &mut P, at: DateTime<Utc>) -> DomainResult<()>
    where
        P: CatalogProduct + ?Sized,
    {
        let mut vendor = self.repository.get(vendor_id).ok_or_else(DomainError::not_found)?;
        if vendor.has_product(product) {
            vendor.remove_product(product);
            self.repository.save(&mut vendor, at)?;
        }
        Ok(())
    }

    /// The stored vendor currently listing `product`, if any.
    pub fn owner_of<P>(&self, product: &P) -> Option<VendorId>
    where
        P: CatalogProduct + ?Sized,
    {
        self.repository
            .list()
            .into_iter()
            .find(|v| v.has_product(product))
            .map(|v| v.id_typed())
    }
}
