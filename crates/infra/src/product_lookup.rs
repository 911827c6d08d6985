//! In-memory execution of vendor shop-list queries.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::RwLock;

use marketplace_catalog::Product;
use marketplace_core::{ChannelId, DomainError, DomainResult, Entity, Locale, ProductId};
use marketplace_vendors::{
    Page, ProductListQuery, ProductListing, ProductLookup, SortDirection, SortDirective, SortField,
    VendorId,
};

use crate::config::CatalogConfig;

/// Product catalog held in memory, queryable per vendor and channel.
#[derive(Debug)]
pub struct InMemoryProductLookup {
    products: RwLock<HashMap<ProductId, Product>>,
    page_size: usize,
    default_locale: Locale,
}

impl InMemoryProductLookup {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            products: RwLock::new(HashMap::new()),
            page_size: config.shop_page_size,
            default_locale: config.default_locale.clone(),
        }
    }

    /// Shop list query for a request that may not name a locale; the
    /// configured default locale is used then.
    pub fn shop_list_query(
        &self,
        channel: ChannelId,
        vendor: VendorId,
        locale: Option<&Locale>,
        sorting: &[SortDirective],
    ) -> ProductListQuery {
        let locale = locale.unwrap_or(&self.default_locale);
        self.create_shop_list_by_vendor_query(channel, vendor, locale, sorting)
    }

    /// Insert or replace a product snapshot.
    pub fn upsert(&self, product: Product) {
        if let Ok(mut map) = self.products.write() {
            map.insert(*product.id(), product);
        }
    }

    pub fn remove(&self, id: ProductId) -> Option<Product> {
        self.products.write().ok()?.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.products.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn compare(a: &ProductListing, b: &ProductListing, directive: &SortDirective) -> Ordering {
    let ordering = match directive.field {
        SortField::Name => a.name.cmp(&b.name),
        SortField::Code => a.code.cmp(&b.code),
        // Unpositioned products sort after positioned ones.
        SortField::Position => (a.position.is_none(), a.position).cmp(&(b.position.is_none(), b.position)),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
    };
    match directive.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

impl ProductLookup for InMemoryProductLookup {
    fn execute(&self, query: &ProductListQuery) -> DomainResult<Vec<ProductListing>> {
        let map = self
            .products
            .read()
            .map_err(|_| DomainError::invariant("product lookup lock poisoned"))?;

        let mut listings: Vec<ProductListing> = map
            .values()
            .filter(|p| p.is_enabled())
            .filter(|p| p.vendor_id() == Some(query.vendor))
            .filter(|p| p.has_channel(query.channel))
            .filter_map(|p| {
                let translation = p.translation(&query.locale)?;
                Some(ProductListing {
                    product_id: *p.id(),
                    code: p.code().to_string(),
                    name: translation.name().to_string(),
                    slug: translation.slug().map(str::to_owned),
                    position: p.position(),
                    created_at: p.created_at(),
                })
            })
            .collect();

        listings.sort_by(|a, b| {
            query
                .sorting
                .iter()
                .map(|directive| compare(a, b, directive))
                .find(|o| o.is_ne())
                .unwrap_or_else(|| a.code.cmp(&b.code))
        });

        let page = match query.page {
            Some(page) => page,
            None => Page::new(1, self.page_size)?,
        };

        Ok(listings
            .into_iter()
            .skip(page.offset())
            .take(page.size())
            .collect())
    }
}
