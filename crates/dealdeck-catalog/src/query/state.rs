//! Query state: the four independent axes a browser can set.

use crate::catalog::{Category, Source};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort options for the derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Most recently posted first.
    #[default]
    Latest,
    /// Highest advertised discount first.
    Discount,
    /// Discounted price, low to high.
    PriceLowToHigh,
    /// Discounted price, high to low.
    PriceHighToLow,
    /// Most popular first.
    Trending,
}

impl SortOption {
    /// All sort options, in the order the sort menu shows them.
    pub const ALL: [SortOption; 5] = [
        SortOption::Latest,
        SortOption::Discount,
        SortOption::PriceLowToHigh,
        SortOption::PriceHighToLow,
        SortOption::Trending,
    ];

    /// Wire name (e.g., for query strings).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Latest => "latest",
            SortOption::Discount => "discount",
            SortOption::PriceLowToHigh => "price_asc",
            SortOption::PriceHighToLow => "price_desc",
            SortOption::Trending => "trending",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "latest" => Some(SortOption::Latest),
            "discount" => Some(SortOption::Discount),
            "price_asc" => Some(SortOption::PriceLowToHigh),
            "price_desc" => Some(SortOption::PriceHighToLow),
            "trending" => Some(SortOption::Trending),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Latest => "Latest",
            SortOption::Discount => "Highest Discount",
            SortOption::PriceLowToHigh => "Price: Low to High",
            SortOption::PriceHighToLow => "Price: High to Low",
            SortOption::Trending => "Trending",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SortOption {
    type Err = crate::error::CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::from_str(s).ok_or_else(|| crate::error::CatalogError::UnknownLabel {
            kind: "sort option",
            value: s.to_string(),
        })
    }
}

/// The current filter/sort/search state.
///
/// Four independent axes; the derived view is a pure function of the final
/// values, so the order they were set in never matters.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct QueryState {
    /// Keep only deals from this marketplace.
    pub source: Option<Source>,
    /// Keep only deals in this category.
    pub category: Option<Category>,
    /// Case-insensitive title substring. Empty matches all.
    pub search_term: String,
    /// Active sort.
    pub sort: SortOption,
}

impl QueryState {
    /// State with no filters, empty search, Latest sort.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any filter or search narrows the view.
    pub fn is_narrowed(&self) -> bool {
        self.source.is_some() || self.category.is_some() || !self.search_term.is_empty()
    }
}
