//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[session]");
    ctx.output.kv("role", ctx.config.session.role.as_str());
    ctx.output.kv("currency", ctx.config.session.currency.code());

    ctx.output.info("[catalog]");
    ctx.output.kv(
        "path",
        ctx.config
            .catalog
            .path
            .as_deref()
            .unwrap_or("(built-in sample)"),
    );
    ctx.output.kv(
        "suggestion_limit",
        &ctx.config.catalog.suggestion_limit.to_string(),
    );

    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);
    ctx.output
        .kv("format", &format!("{:?}", ctx.config.logging.format).to_lowercase());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("beanmarket.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if ctx.config.logging.level.parse::<tracing::Level>().is_err() {
        errors.push(format!(
            "logging.level '{}' is not one of trace, debug, info, warn, error",
            ctx.config.logging.level
        ));
    }

    if ctx.config.catalog.suggestion_limit == 0 {
        warnings.push("catalog.suggestion_limit is 0; no flavor suggestions will show".to_string());
    }

    match ctx.open_storefront() {
        Ok(store) => {
            if store.catalog().is_empty() {
                warnings.push("catalog has no items".to_string());
            } else {
                ctx.output
                    .info(&format!("Catalog: {} items", store.catalog().len()));
            }
        }
        Err(e) => errors.push(format!("{:#}", e)),
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
