//! beanmarket - command line storefront for the coffee marketplace.
//!
//! Commands:
//! - `beanmarket catalog` - Browse and filter the catalog
//! - `beanmarket flavors` - List popular flavor notes
//! - `beanmarket item` - Show one coffee
//! - `beanmarket cart` - Run a scripted cart session
//! - `beanmarket shop` - Shop interactively
//! - `beanmarket config` - Manage configuration

mod catalog_file;
mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

use commands::{CartArgs, CatalogArgs, ConfigArgs, FlavorsArgs, ItemArgs};
use config::{LogFormat, LoggingConfig};

/// beanmarket - browse coffee and fill a cart from the terminal
#[derive(Parser)]
#[command(name = "beanmarket")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output (debug logs)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog with search and filters
    Catalog(CatalogArgs),

    /// Show popular flavor notes
    Flavors(FlavorsArgs),

    /// Show details for one coffee
    Item(ItemArgs),

    /// Apply cart operations and print the resulting cart
    Cart(CartArgs),

    /// Start an interactive shopping session
    Shop,

    /// Manage configuration
    Config(ConfigArgs),
}

/// Log level from config; `--verbose` forces debug. Unknown names fall back to warn.
fn log_level(logging: &LoggingConfig, verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        logging.level.parse::<Level>().unwrap_or(Level::WARN)
    }
}

/// Install the global subscriber. Logs go to stderr so JSON output stays clean.
fn init_logging(logging: &LoggingConfig, verbose: bool) {
    let level = log_level(logging, verbose);

    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    init_logging(&ctx.config.logging, cli.verbose);

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Flavors(args) => commands::flavors::run(args, &ctx),
        Commands::Item(args) => commands::item::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Shop => commands::shop::run(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_level_comes_from_config() {
        let mut logging = LoggingConfig::default();
        assert_eq!(log_level(&logging, false), Level::WARN);
        assert_eq!(log_level(&logging, true), Level::DEBUG);

        logging.level = "info".to_string();
        assert_eq!(log_level(&logging, false), Level::INFO);

        logging.level = "chatty".to_string();
        assert_eq!(log_level(&logging, false), Level::WARN);
    }

    #[test]
    fn test_parse_catalog_flags() {
        let cli = Cli::try_parse_from([
            "beanmarket",
            "--json",
            "catalog",
            "--search",
            "choc",
            "--stock",
            "in-stock",
            "--price",
            "under-25",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Catalog(args) => {
                assert_eq!(args.search, "choc");
                assert_eq!(args.price, "under-25");
            }
            _ => panic!("expected catalog command"),
        }
    }

    #[test]
    fn test_parse_cart_ops() {
        let cli = Cli::try_parse_from(["beanmarket", "cart", "add:1", "qty:1=3"]).unwrap();
        match cli.command {
            Commands::Cart(args) => assert_eq!(args.ops.len(), 2),
            _ => panic!("expected cart command"),
        }
        assert!(Cli::try_parse_from(["beanmarket", "cart", "buy:1"]).is_err());
        assert!(Cli::try_parse_from(["beanmarket", "cart"]).is_err());
    }
}
