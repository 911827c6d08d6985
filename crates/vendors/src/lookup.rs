//! Product Lookup contract: "products of this vendor in this channel".
//!
//! The vendor crate only describes the query. Execution (filtering, sorting,
//! pagination against real storage) belongs to the host's persistence layer.

use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use marketplace_core::{ChannelId, DomainError, DomainResult, Locale, ProductId};

use crate::vendor::VendorId;

/// Sortable product attributes exposed to shop listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Code,
    Position,
    CreatedAt,
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "code" => Ok(Self::Code),
            "position" => Ok(Self::Position),
            "created_at" | "createdAt" => Ok(Self::CreatedAt),
            other => Err(DomainError::validation(format!("unknown sort field: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(DomainError::validation(format!("unknown sort direction: {other}"))),
        }
    }
}

/// One ordering key. Directives apply in list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Parse request-style `(field, direction)` pairs such as `("name", "asc")`.
    pub fn parse_all<'a, I>(pairs: I) -> DomainResult<Vec<Self>>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        pairs
            .into_iter()
            .map(|(field, direction)| -> DomainResult<Self> {
                Ok(Self {
                    field: field.parse()?,
                    direction: direction.parse()?,
                })
            })
            .collect()
    }
}

/// 1-based page request.
///
/// Always constructed through [`Page::new`], decoding included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPage")]
pub struct Page {
    number: usize,
    size: usize,
}

#[derive(Deserialize)]
struct RawPage {
    number: usize,
    size: usize,
}

impl TryFrom<RawPage> for Page {
    type Error = DomainError;

    fn try_from(raw: RawPage) -> Result<Self, Self::Error> {
        Page::new(raw.number, raw.size)
    }
}

impl Page {
    pub fn new(number: usize, size: usize) -> DomainResult<Self> {
        if number == 0 {
            return Err(DomainError::validation("page number starts at 1"));
        }
        if size == 0 {
            return Err(DomainError::validation("page size must be positive"));
        }
        Ok(Self { number, size })
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Rows to skip. Saturates for pages far past any real result set.
    pub fn offset(&self) -> usize {
        self.number.saturating_sub(1).saturating_mul(self.size)
    }
}

/// Description of a vendor shop listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListQuery {
    pub channel: ChannelId,
    pub vendor: VendorId,
    pub locale: Locale,
    pub sorting: Vec<SortDirective>,
    pub page: Option<Page>,
}

impl ProductListQuery {
    /// Shop list for `vendor` in `channel`. Without directives, listings are
    /// ordered by position.
    pub fn shop_list_by_vendor(
        channel: ChannelId,
        vendor: VendorId,
        locale: Locale,
        sorting: &[SortDirective],
    ) -> Self {
        let sorting = if sorting.is_empty() {
            vec![SortDirective::asc(SortField::Position)]
        } else {
            sorting.to_vec()
        };

        Self {
            channel,
            vendor,
            locale,
            sorting,
            page: None,
        }
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }
}

/// A product row as shown in a vendor's shop list, localized to the query locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListing {
    pub product_id: ProductId,
    pub code: String,
    pub name: String,
    pub slug: Option<String>,
    pub position: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Host-provided product lookup.
///
/// Visible products are enabled, owned by the vendor, assigned to the channel,
/// and translated into the query locale.
pub trait ProductLookup {
    fn create_shop_list_by_vendor_query(
        &self,
        channel: ChannelId,
        vendor: VendorId,
        locale: &Locale,
        sorting: &[SortDirective],
    ) -> ProductListQuery {
        ProductListQuery::shop_list_by_vendor(channel, vendor, locale.clone(), sorting)
    }

    fn execute(&self, query: &ProductListQuery) -> DomainResult<Vec<ProductListing>>;
}
