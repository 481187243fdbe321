//! Deal source marketplaces.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marketplace a deal was posted on. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    Amazon,
    Flipkart,
}

impl Source {
    /// All sources, in display order.
    pub const ALL: [Source; 2] = [Source::Amazon, Source::Flipkart];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Amazon => "Amazon",
            Source::Flipkart => "Flipkart",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "amazon" => Some(Source::Amazon),
            "flipkart" => Some(Source::Flipkart),
            _ => None,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Source {
    type Err = crate::error::CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Source::from_str(s).ok_or_else(|| crate::error::CatalogError::UnknownLabel {
            kind: "source",
            value: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_round_trip() {
        for source in Source::ALL {
            assert_eq!(Source::from_str(source.as_str()), Some(source));
        }
    }

    #[test]
    fn test_source_from_str_case_insensitive() {
        assert_eq!(Source::from_str("AMAZON"), Some(Source::Amazon));
        assert_eq!(Source::from_str("flipkart"), Some(Source::Flipkart));
    }

    #[test]
    fn test_source_from_str_unknown() {
        assert_eq!(Source::from_str("ebay"), None);
    }
}
