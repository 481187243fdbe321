//! Shared command context.

use crate::output::Output;
use anyhow::Result;
use dealdeck_catalog::query::DealStore;
use dealdeck_feed::sample_deals;

/// Context passed to every command: output handler plus feed parameters.
pub struct Context {
    pub output: Output,
    count: usize,
    seed: u64,
}

impl Context {
    pub fn new(count: usize, seed: u64, output: Output) -> Self {
        Self {
            output,
            count,
            seed,
        }
    }

    /// Build a store over the sample feed. Each command gets its own
    /// instance; the engine is single-owner by design.
    pub fn store(&self) -> Result<DealStore> {
        let deals = sample_deals(self.count, self.seed);
        Ok(DealStore::new(deals)?)
    }
}
