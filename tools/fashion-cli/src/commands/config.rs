//! Configuration management commands.

use anyhow::Result;
use dialoguer::Confirm;

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;

    ctx.output.info("[api]");
    ctx.output.kv("base_url", &config.api.base_url);
    ctx.output.kv("timeout_ms", &config.api.timeout_ms.to_string());
    ctx.output.kv("max_retries", &config.api.max_retries.to_string());

    ctx.output.info("[view]");
    ctx.output.kv("page_size", &config.view.page_size.to_string());
    ctx.output.kv("recency_days", &config.view.recency_days.to_string());
    ctx.output.kv("price_ceiling", &config.view.price_ceiling.to_string());
    if let Some(sort) = config.view.sort {
        ctx.output.kv("sort", sort.as_str());
    }

    ctx.output.info("[favorites]");
    ctx.output
        .kv("path", &config.favorites.store_path().display().to_string());
    ctx.output.kv("key", &config.favorites.key);

    ctx.output.info("[logging]");
    ctx.output.kv("level", config.logging.level.as_directive());
    ctx.output.kv(
        "format",
        match config.logging.format {
            fashion_observability::LogFormat::Json => "json",
            fashion_observability::LogFormat::Human => "human",
        },
    );

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("fashion.toml");

    if config_path.exists() && !force {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", config_path.display()))
            .default(false)
            .interact()?;

        if !overwrite {
            ctx.output.warn("Config left unchanged");
            return Ok(());
        }
    }

    std::fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
