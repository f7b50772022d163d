//! Item detail.

use anyhow::Result;
use beanmarket_commerce::ItemId;

use super::ItemArgs;
use crate::context::Context;
use crate::output::{stars, stock_badge};

/// Run the item command.
pub fn run(args: ItemArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_storefront()?;
    let item = store.item(&ItemId::new(args.id))?;

    if ctx.output.is_json() {
        ctx.output.json(item);
        return Ok(());
    }

    ctx.output.header(&item.name);
    ctx.output.kv("roaster", &item.roaster_name);
    ctx.output.kv(
        "price",
        &format!("{} / {}", item.unit_price.display(), item.package_weight),
    );
    ctx.output
        .kv("rating", &format!("{} ({}/5)", stars(item.rating), item.rating));
    ctx.output.kv("stock", &stock_badge(item.in_stock));
    if !item.flavor_notes.is_empty() {
        ctx.output.kv("flavor notes", &item.flavor_notes.join(", "));
    }
    if let Some(ref description) = item.description {
        ctx.output.kv("description", description);
    }
    if let Some(ref about) = item.roaster_description {
        ctx.output.kv("about the roaster", about);
    }
    if let Some(ref tips) = item.brewing_tips {
        ctx.output.kv("brewing tips", tips);
    }

    Ok(())
}
