//! Sample deal feed generation for DealDeck.
//!
//! The query engine takes its collection from an external data source; this
//! crate is the local stand-in. It produces a reproducible feed of plausible
//! deals from a seed, so the same seed always yields the same catalog.

use chrono::{DateTime, Duration, TimeZone, Utc};
use dealdeck_catalog::catalog::{Category, Deal, Source};
use dealdeck_catalog::ids::DealId;
use dealdeck_catalog::money::Price;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Default number of deals in a sample feed.
pub const DEFAULT_FEED_SIZE: usize = 50;

/// Default feed seed.
pub const DEFAULT_SEED: u64 = 7;

/// Product names per category, cycled into deal titles.
const PRODUCT_NAMES: [(Category, &[&str]); 6] = [
    (Category::Electronics, &["Wireless Headphones", "Bluetooth Speaker", "Smart TV 43 inch", "Gaming Mouse"]),
    (Category::Fashion, &["Cotton Kurta", "Running Shoes", "Denim Jacket", "Leather Wallet"]),
    (Category::HomeKitchen, &["Non-stick Cookware Set", "Bedsheet Combo", "Storage Containers", "Wall Clock"]),
    (Category::Grocery, &["Basmati Rice 5kg", "Dry Fruits Pack", "Green Tea 100 Bags", "Olive Oil 1L"]),
    (Category::Mobiles, &["Smartphone 128GB", "Phone Case", "Fast Charger 65W", "Screen Guard"]),
    (Category::Appliances, &["Mixer Grinder", "Air Fryer", "Electric Kettle", "Steam Iron"]),
];

/// Parameters for feed generation.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Number of deals to generate.
    pub count: usize,
    /// RNG seed; equal seeds produce identical feeds.
    pub seed: u64,
    /// Deals are posted within the 7 days before this instant.
    pub posted_before: DateTime<Utc>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_FEED_SIZE,
            seed: DEFAULT_SEED,
            posted_before: feed_epoch(),
        }
    }
}

/// Fixed reference instant for default feeds, so timestamps are reproducible.
pub fn feed_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
}

/// Generate a sample feed with the default window anchor.
pub fn sample_deals(count: usize, seed: u64) -> Vec<Deal> {
    generate(&FeedConfig {
        count,
        seed,
        ..FeedConfig::default()
    })
}

/// Generate a sample feed.
///
/// Sources alternate, categories round-robin, prices land between ₹500 and
/// ₹10,000 with a 10-79% discount, and every deal is posted within the week
/// before `posted_before`.
pub fn generate(config: &FeedConfig) -> Vec<Deal> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let week_secs = Duration::days(7).num_seconds();

    let deals: Vec<Deal> = (0..config.count)
        .map(|i| {
            let n = i + 1;
            let source = if i % 2 == 0 {
                Source::Amazon
            } else {
                Source::Flipkart
            };
            let (category, names) = PRODUCT_NAMES[i % PRODUCT_NAMES.len()];
            let name = names[rng.gen_range(0..names.len())];

            let original_rupees = rng.gen_range(500.0..10_000.0_f64);
            let discount = rng.gen_range(10..80_u8);
            let original_price = Price::from_rupees((original_rupees * 100.0).round() / 100.0);
            let discounted_price =
                Price::new((original_price.paise as f64 * (1.0 - discount as f64 / 100.0)).round()
                    as i64);

            let age = Duration::seconds(rng.gen_range(0..week_secs));

            Deal {
                id: DealId::new(format!("deal-{n}")),
                title: format!("{name} - A great deal on {category}"),
                image: format!("https://picsum.photos/seed/{n}/400/300"),
                original_price,
                discounted_price,
                discount_percentage: discount,
                source,
                category,
                posted_at: config.posted_before - age,
                popularity: rng.gen_range(0..5_000),
                affiliate_link: format!("https://example.com/deal/{n}"),
            }
        })
        .collect();

    debug!(count = deals.len(), seed = config.seed, "sample feed generated");
    deals
}

#[cfg(test)]
mod tests {
    use super::*;
    use dealdeck_catalog::query::DealStore;

    #[test]
    fn test_feed_is_deterministic() {
        let first = sample_deals(50, 7);
        let second = sample_deals(50, 7);
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = sample_deals(50, 7);
        let second = sample_deals(50, 8);
        assert_ne!(first, second);
    }

    #[test]
    fn test_feed_size_and_unique_ids() {
        let deals = sample_deals(50, 7);
        assert_eq!(deals.len(), 50);
        // Unique ids: the store would reject duplicates.
        assert!(DealStore::new(deals).is_ok());
    }

    #[test]
    fn test_feed_records_are_well_formed() {
        for deal in sample_deals(100, 42) {
            deal.validate().unwrap();
            assert!(deal.discount_percentage >= 10 && deal.discount_percentage < 80);
            assert!(deal.original_price >= Price::from_rupees(500.0));
            assert!(deal.original_price <= Price::from_rupees(10_000.0));
            assert!(deal.posted_at <= feed_epoch());
            assert!(deal.posted_at >= feed_epoch() - Duration::days(7));
        }
    }

    #[test]
    fn test_sources_alternate() {
        let deals = sample_deals(4, 7);
        assert_eq!(deals[0].source, Source::Amazon);
        assert_eq!(deals[1].source, Source::Flipkart);
        assert_eq!(deals[2].source, Source::Amazon);
    }

    #[test]
    fn test_categories_round_robin() {
        let deals = sample_deals(12, 7);
        assert_eq!(deals[0].category, Category::Electronics);
        assert_eq!(deals[6].category, Category::Electronics);
        assert_eq!(deals[5].category, Category::Appliances);
    }
}
