//! `dealdeck categories` - list category and sort labels.

use crate::context::Context;
use anyhow::Result;
use dealdeck_catalog::catalog::{Category, Source};
use dealdeck_catalog::query::SortOption;

pub fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "sources": Source::ALL.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            "categories": Category::ALL.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
            "sorts": SortOption::ALL.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
        }));
        return Ok(());
    }

    ctx.output.header("Sources");
    for source in Source::ALL {
        ctx.output.list_item(source.as_str());
    }

    ctx.output.header("Categories");
    for category in Category::ALL {
        ctx.output.list_item(category.as_str());
    }

    ctx.output.header("Sort options");
    for sort in SortOption::ALL {
        ctx.output
            .list_item(&format!("{} ({})", sort.display_name(), sort.as_str()));
    }

    Ok(())
}
