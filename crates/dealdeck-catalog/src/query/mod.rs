//! Query module.
//!
//! Contains the filter/sort/search state, the store that derives the
//! ordered view, and the load-more pagination window.

mod engine;
mod state;
mod view;

pub use engine::DealStore;
pub use state::{QueryState, SortOption};
pub use view::{ViewWindow, DEFAULT_PAGE_SIZE};
