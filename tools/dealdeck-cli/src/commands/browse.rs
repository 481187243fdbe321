//! `dealdeck browse` - filter, sort, and search the catalog.

use crate::context::Context;
use crate::output::source_badge;
use anyhow::Result;
use clap::Args;
use dealdeck_catalog::catalog::{Category, Source};
use dealdeck_catalog::query::{SortOption, ViewWindow, DEFAULT_PAGE_SIZE};

#[derive(Args)]
pub struct BrowseArgs {
    /// Only deals from this marketplace (amazon, flipkart)
    #[arg(long)]
    pub source: Option<String>,

    /// Only deals in this category (electronics, fashion, home-kitchen, ...)
    #[arg(long)]
    pub category: Option<String>,

    /// Sort order (latest, discount, price_asc, price_desc, trending)
    #[arg(long, default_value = "latest")]
    pub sort: String,

    /// Case-insensitive title search
    #[arg(long)]
    pub search: Option<String>,

    /// How many load-more pages to reveal
    #[arg(long, default_value_t = 1)]
    pub pages: usize,

    /// Deals revealed per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub per_page: usize,
}

pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.store()?;

    if let Some(raw) = &args.source {
        let source: Source = raw.parse()?;
        store.set_source_filter(Some(source));
    }
    if let Some(raw) = &args.category {
        let category: Category = raw.parse()?;
        store.set_category_filter(Some(category));
    }
    let sort: SortOption = args.sort.parse()?;
    store.set_sort_option(sort);
    if let Some(term) = &args.search {
        store.set_search_term(term.clone());
    }

    let view = store.derived_view();
    let mut window = ViewWindow::new(args.per_page.max(1));
    for _ in 1..args.pages.max(1) {
        window.load_more();
    }
    let shown = window.slice(&view);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "total": view.len(),
            "visible": shown.len(),
            "deals": shown,
        }));
        return Ok(());
    }

    if view.is_empty() {
        ctx.output.info("No deals found. Try adjusting your filters.");
        return Ok(());
    }

    ctx.output
        .header(&format!("{} deals, sorted by {}", view.len(), sort.display_name()));
    let widths = [10, 44, 10, 8, 9];
    ctx.output.table_row(
        &["ID", "TITLE", "PRICE", "OFF", "SOURCE"],
        &widths,
    );
    for deal in shown {
        let title: String = deal.title.chars().take(42).collect();
        ctx.output.table_row(
            &[
                deal.id.as_str(),
                &title,
                &deal.discounted_price.display(),
                &format!("{}%", deal.discount_percentage),
                &source_badge(deal.source),
            ],
            &widths,
        );
    }

    if window.has_more(view.len()) {
        ctx.output.info(&format!(
            "{} more deals. Rerun with --pages {} to load more.",
            view.len() - shown.len(),
            args.pages.max(1) + 1
        ));
    }

    Ok(())
}
