//! Deal catalog module.
//!
//! Contains the deal record and the closed source/category sets.

mod category;
mod deal;
mod source;

pub use category::Category;
pub use deal::Deal;
pub use source::Source;
