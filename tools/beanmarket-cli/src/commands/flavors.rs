//! Flavor suggestions.

use anyhow::Result;

use super::FlavorsArgs;
use crate::context::Context;

/// Run the flavors command.
pub fn run(args: FlavorsArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_storefront()?;
    let catalog = store.catalog();

    let tags = if args.all {
        catalog.distinct_flavor_tags()
    } else {
        catalog.flavor_suggestions(args.limit.unwrap_or(ctx.config.catalog.suggestion_limit))
    };

    if ctx.output.is_json() {
        ctx.output.json(&tags);
        return Ok(());
    }

    ctx.output.header("Popular flavors");
    for tag in &tags {
        ctx.output.list_item(tag);
    }

    Ok(())
}
