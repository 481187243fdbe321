//! `dealdeck show` - detail view for one deal.

use crate::context::Context;
use crate::output::{discount_badge, source_badge};
use anyhow::Result;
use clap::Args;
use dealdeck_catalog::error::CatalogError;
use dealdeck_catalog::ids::DealId;

/// Related deals shown under the detail view.
const RELATED_LIMIT: usize = 5;

#[derive(Args)]
pub struct ShowArgs {
    /// Deal id (e.g., deal-7)
    pub id: String,
}

pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.store()?;
    let id = DealId::new(&args.id);

    // Lookup is over the full collection; filters never hide a direct view.
    let deal = store
        .find_by_id(&id)
        .ok_or_else(|| CatalogError::DealNotFound(args.id.clone()))?
        .clone();

    let related = store.related_deals(&id, RELATED_LIMIT);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "deal": deal,
            "related": related,
        }));
        return Ok(());
    }

    ctx.output.header(&deal.title);
    ctx.output.kv("id", deal.id.as_str());
    ctx.output.kv("category", deal.category.as_str());
    ctx.output.kv("source", &source_badge(deal.source));
    ctx.output.kv(
        "price",
        &format!(
            "{} (was {}, {})",
            deal.discounted_price.display(),
            deal.original_price.display(),
            discount_badge(deal.discount_percentage)
        ),
    );
    ctx.output
        .kv("posted", &deal.posted_at.format("%Y-%m-%d %H:%M UTC").to_string());
    ctx.output.kv("link", &deal.affiliate_link);

    if !related.is_empty() {
        ctx.output.header("Related deals");
        for d in related {
            ctx.output.list_item(&format!(
                "{} - {} ({})",
                d.id,
                d.title,
                d.discounted_price.display()
            ));
        }
    }

    Ok(())
}
