//! CLI commands.

pub mod browse;
pub mod categories;
pub mod show;

pub use browse::BrowseArgs;
pub use show::ShowArgs;
