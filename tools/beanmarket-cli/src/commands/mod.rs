//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod flavors;
pub mod item;
pub mod shop;

use beanmarket_commerce::search::StockFilter;
use clap::{Args, Subcommand};

use cart::CartOp;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Match coffee name, roaster or flavor notes (case-insensitive).
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Stock filter: all, in-stock, out-of-stock.
    #[arg(long, default_value = "all")]
    pub stock: StockFilter,

    /// Price filter: all, under-25, 25-30, over-30 (or under-X, X-Y, over-X).
    #[arg(long, default_value = "all")]
    pub price: String,
}

/// Arguments for the flavors command.
#[derive(Args)]
pub struct FlavorsArgs {
    /// Number of suggestions (default from config).
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// List every distinct flavor note.
    #[arg(long, conflicts_with = "limit")]
    pub all: bool,
}

/// Arguments for the item command.
#[derive(Args)]
pub struct ItemArgs {
    /// Catalog item id.
    pub id: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Operations applied in order: add:<id>, remove:<id>, qty:<id>=<n>,
    /// inc:<id>, dec:<id>, clear.
    #[arg(required = true)]
    pub ops: Vec<CartOp>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file and the catalog it points to.
    Validate,
}
