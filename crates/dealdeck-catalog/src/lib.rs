//! Deal catalog domain types and query engine for DealDeck.
//!
//! This crate provides the core of a client-side deal browser:
//!
//! - **Catalog**: Deal records, sources, categories, prices
//! - **Query**: Filter/sort/search state, the derivation engine, pagination window
//!
//! # Example
//!
//! ```rust,ignore
//! use dealdeck_catalog::prelude::*;
//!
//! let mut store = DealStore::new(deals)?;
//! store.set_source_filter(Some(Source::Amazon));
//! store.set_sort_option(SortOption::Trending);
//!
//! for deal in store.derived_view() {
//!     println!("{} {}", deal.discounted_price.display(), deal.title);
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod query;

pub use error::CatalogError;
pub use ids::DealId;
pub use money::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::DealId;
    pub use crate::money::Price;

    // Catalog
    pub use crate::catalog::{Category, Deal, Source};

    // Query
    pub use crate::query::{DealStore, QueryState, SortOption, ViewWindow};
}
