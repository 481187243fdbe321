//! The deal record.

use crate::catalog::{Category, Source};
use crate::error::CatalogError;
use crate::ids::DealId;
use crate::money::Price;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single deal in the catalog.
///
/// Deals are immutable once ingested; the collection is static for the
/// lifetime of the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deal {
    /// Unique deal identifier.
    pub id: DealId,
    /// Deal title as posted.
    pub title: String,
    /// Product image URL.
    pub image: String,
    /// Listed price before discount.
    pub original_price: Price,
    /// Price after discount.
    pub discounted_price: Price,
    /// Advertised discount, 0-100. Stored independently of the two prices
    /// and never recomputed from them.
    pub discount_percentage: u8,
    /// Marketplace the deal was posted on.
    pub source: Source,
    /// Product category.
    pub category: Category,
    /// When the deal was posted.
    pub posted_at: DateTime<Utc>,
    /// Click/view count, used as the trending rank.
    pub popularity: u32,
    /// Outbound affiliate link.
    pub affiliate_link: String,
}

impl Deal {
    /// Check the record-level constraints: non-empty title, discounted
    /// price not above the original, advertised discount within 0-100.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.title.is_empty() {
            return Err(CatalogError::InvalidDeal {
                id: self.id.to_string(),
                reason: "empty title".to_string(),
            });
        }
        if self.discounted_price > self.original_price {
            return Err(CatalogError::InvalidDeal {
                id: self.id.to_string(),
                reason: "discounted price above original price".to_string(),
            });
        }
        if self.discount_percentage > 100 {
            return Err(CatalogError::InvalidDeal {
                id: self.id.to_string(),
                reason: format!("discount percentage {} out of range", self.discount_percentage),
            });
        }
        Ok(())
    }

    /// Amount saved against the original price.
    pub fn savings(&self) -> Price {
        self.original_price - self.discounted_price
    }

    /// Discount implied by the two prices. May disagree with the stored
    /// `discount_percentage`; callers that care can cross-check.
    pub fn implied_discount(&self) -> u8 {
        self.discounted_price.percent_off(self.original_price)
    }

    /// Case-insensitive substring match on the title.
    pub fn title_matches(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }
}
