//! Deal categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category of a deal. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Fashion,
    HomeKitchen,
    Grocery,
    Mobiles,
    Appliances,
}

impl Category {
    /// All categories, in the order the filter bar shows them.
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Fashion,
        Category::HomeKitchen,
        Category::Grocery,
        Category::Mobiles,
        Category::Appliances,
    ];

    /// Human-readable label (e.g., "Home & Kitchen").
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::HomeKitchen => "Home & Kitchen",
            Category::Grocery => "Grocery",
            Category::Mobiles => "Mobiles",
            Category::Appliances => "Appliances",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "electronics" => Some(Category::Electronics),
            "fashion" => Some(Category::Fashion),
            "home & kitchen" | "home" | "home-kitchen" => Some(Category::HomeKitchen),
            "grocery" => Some(Category::Grocery),
            "mobiles" => Some(Category::Mobiles),
            "appliances" => Some(Category::Appliances),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = crate::error::CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_str(s).ok_or_else(|| crate::error::CatalogError::UnknownLabel {
            kind: "category",
            value: s.to_string(),
        })
    }
}
