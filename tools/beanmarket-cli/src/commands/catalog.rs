//! Catalog browsing.

use anyhow::{Context as _, Result};
use beanmarket_commerce::search::{CatalogQuery, PriceFilter};

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_storefront()?;
    let price = PriceFilter::parse(&args.price, store.catalog().currency())
        .context("Invalid --price value")?;

    let query = CatalogQuery::new()
        .with_text(args.search)
        .with_stock(args.stock)
        .with_price(price);
    let results = store.browse(&query);

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    ctx.output.header("Coffee Catalog");
    if results.is_empty() && query.is_unfiltered() {
        ctx.output.info("The catalog is empty");
    } else if results.is_empty() {
        ctx.output.info("No coffees match your current filters");
    } else {
        ctx.output.items(&results.items);
    }
    ctx.output.info(&results.summary_line());

    Ok(())
}
