//! Interactive shopping session.

use std::str::FromStr;

use anyhow::{Context as _, Result};
use beanmarket_commerce::search::{CatalogQuery, PriceFilter, StockFilter};
use beanmarket_commerce::Storefront;
use dialoguer::Input;

use super::cart::{CartOp, OpParseError};
use crate::context::Context;

const HELP: &[&str] = &[
    "search [text]        filter by name, roaster or flavor (empty clears)",
    "stock <filter>       all, in-stock, out-of-stock",
    "price <filter>       all, under-25, 25-30, over-30",
    "flavors              popular flavor notes",
    "add <id>             add one bag to the cart",
    "remove <id>          drop a line from the cart",
    "qty <id> <n>         set a line's quantity (0 removes it)",
    "inc <id> / dec <id>  adjust a line by one",
    "clear                empty the cart",
    "show                 show the cart",
    "quit                 end the session",
];

/// A line typed at the shop prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum ShopCommand {
    Search(String),
    Stock(StockFilter),
    Price(String),
    Flavors,
    Cart(CartOp),
    Show,
    Help,
    Quit,
}

impl FromStr for ShopCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "search" | "s" => ShopCommand::Search(rest.to_string()),
            "stock" => ShopCommand::Stock(rest.parse().map_err(|e| format!("{}", e))?),
            "price" => ShopCommand::Price(rest.to_string()),
            "flavors" => ShopCommand::Flavors,
            "show" | "cart" => ShopCommand::Show,
            "help" | "?" => ShopCommand::Help,
            "quit" | "exit" | "q" => ShopCommand::Quit,
            "qty" => {
                let mut parts = rest.split_whitespace();
                let op = match (parts.next(), parts.next()) {
                    (Some(id), Some(n)) => format!("qty:{}={}", id, n),
                    _ => format!("qty:{}", rest),
                };
                ShopCommand::Cart(parse_op(&op)?)
            }
            op if rest.is_empty() => ShopCommand::Cart(parse_op(op)?),
            op => ShopCommand::Cart(parse_op(&format!("{}:{}", op, rest))?),
        };
        Ok(command)
    }
}

fn parse_op(s: &str) -> Result<CartOp, String> {
    s.parse().map_err(|e: OpParseError| e.to_string())
}

/// Current browse filters.
struct Browse {
    query: CatalogQuery,
}

impl Browse {
    fn show(&self, store: &Storefront, ctx: &Context) {
        let results = store.browse(&self.query);
        if results.is_empty() && self.query.is_unfiltered() {
            ctx.output.info("The catalog is empty");
        } else if results.is_empty() {
            ctx.output.info("No coffees match your current filters");
        } else {
            ctx.output.items(&results.items);
        }
        ctx.output.info(&results.summary_line());
    }
}

/// Run the shop command.
pub fn run(ctx: &Context) -> Result<()> {
    let mut store = ctx.open_storefront()?;
    let mut browse = Browse {
        query: CatalogQuery::new(),
    };

    ctx.output.header("beanmarket");
    ctx.output.info(&format!(
        "Signed in as {}. Type 'help' for commands.",
        store.session().role
    ));
    browse.show(&store, ctx);

    loop {
        let line: String = Input::new()
            .with_prompt(format!("cart {}", store.cart_summary().badge()).trim_end().to_string())
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;

        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ShopCommand>() {
            Ok(command) => command,
            Err(e) => {
                ctx.output.warn(&e);
                continue;
            }
        };

        match command {
            ShopCommand::Search(text) => {
                browse.query.text = text;
                browse.show(&store, ctx);
            }
            ShopCommand::Stock(stock) => {
                browse.query.stock = stock;
                browse.show(&store, ctx);
            }
            ShopCommand::Price(raw) => match PriceFilter::parse(&raw, store.catalog().currency()) {
                Ok(price) => {
                    browse.query.price = price;
                    browse.show(&store, ctx);
                }
                Err(e) => ctx.output.warn(&e.to_string()),
            },
            ShopCommand::Flavors => {
                let tags = store
                    .catalog()
                    .flavor_suggestions(ctx.config.catalog.suggestion_limit);
                ctx.output.info(&format!("Popular flavors: {}", tags.join(", ")));
            }
            ShopCommand::Cart(op) => match op.apply(&mut store) {
                Ok(()) => {
                    let events = store.drain_events();
                    if events.is_empty() {
                        ctx.output.info("Nothing to change");
                    }
                    for event in &events {
                        ctx.output.event(event);
                    }
                }
                Err(e) => ctx.output.warn(&e.to_string()),
            },
            ShopCommand::Show => ctx.output.cart(&store.cart_summary()),
            ShopCommand::Help => {
                for line in HELP {
                    ctx.output.list_item(line);
                }
            }
            ShopCommand::Quit => break,
        }
    }

    let report = store.close();
    ctx.output.success(&format!(
        "Session closed: {} items, {}",
        report.item_count, report.total
    ));

    Ok(())
}
