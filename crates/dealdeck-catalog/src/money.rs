//! Price type for deal amounts.
//!
//! Uses a paise-based integer representation to avoid floating-point
//! precision issues. Deals are listed in a single currency (INR), so the
//! type carries no currency tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Number of paise in one rupee.
const PAISE_PER_RUPEE: i64 = 100;

/// A price in Indian rupees, stored as paise.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Price {
    /// Amount in paise.
    pub paise: i64,
}

impl Price {
    /// Create a new price from paise.
    pub fn new(paise: i64) -> Self {
        Self { paise }
    }

    /// Create a price from a decimal rupee amount.
    ///
    /// ```
    /// use dealdeck_catalog::money::Price;
    /// let price = Price::from_rupees(1299.50);
    /// assert_eq!(price.paise, 129950);
    /// ```
    pub fn from_rupees(rupees: f64) -> Self {
        Self::new((rupees * PAISE_PER_RUPEE as f64).round() as i64)
    }

    /// Create a zero price.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.paise == 0
    }

    /// Convert to a decimal rupee amount.
    pub fn to_rupees(&self) -> f64 {
        self.paise as f64 / PAISE_PER_RUPEE as f64
    }

    /// Format as a display string (e.g., "₹1299.50").
    pub fn display(&self) -> String {
        format!("\u{20b9}{:.2}", self.to_rupees())
    }

    /// Percentage saved against a reference price, rounded to the nearest
    /// whole percent. Returns 0 when the reference is zero.
    pub fn percent_off(&self, original: Price) -> u8 {
        if original.paise <= 0 {
            return 0;
        }
        let saved = (original.paise - self.paise).max(0) as f64;
        ((saved / original.paise as f64) * 100.0).round() as u8
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        Price::new(self.paise + other.paise)
    }
}

impl Sub for Price {
    type Output = Price;

    fn sub(self, other: Price) -> Price {
        Price::new(self.paise - other.paise)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_from_paise() {
        let p = Price::new(129950);
        assert_eq!(p.paise, 129950);
    }

    #[test]
    fn test_price_from_rupees() {
        let p = Price::from_rupees(49.99);
        assert_eq!(p.paise, 4999);
    }

    #[test]
    fn test_price_to_rupees() {
        let p = Price::new(4999);
        assert!((p.to_rupees() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_price_display() {
        let p = Price::new(129950);
        assert_eq!(p.display(), "\u{20b9}1299.50");
    }

    #[test]
    fn test_price_ordering() {
        let low = Price::from_rupees(99.0);
        let high = Price::from_rupees(100.0);
        assert!(low < high);
    }

    #[test]
    fn test_price_arithmetic() {
        let a = Price::new(1000);
        let b = Price::new(300);
        assert_eq!((a + b).paise, 1300);
        assert_eq!((a - b).paise, 700);
    }

    #[test]
    fn test_percent_off() {
        let original = Price::from_rupees(100.0);
        let discounted = Price::from_rupees(80.0);
        assert_eq!(discounted.percent_off(original), 20);
    }

    #[test]
    fn test_percent_off_zero_reference() {
        let discounted = Price::from_rupees(80.0);
        assert_eq!(discounted.percent_off(Price::zero()), 0);
    }
}
