//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Path => show_path(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.info("");
    ctx.output.info("[shop]");
    ctx.output.kv("name", &ctx.config.shop.name);

    ctx.output.info("");
    ctx.output.info("[storage]");
    if let Some(ref dir) = ctx.config.storage.dir {
        ctx.output.kv("dir", dir);
    }
    ctx.output.kv("key", &ctx.config.storage.key);

    let defaults = &ctx.config.checkout;
    let prefills = [
        ("full_name", &defaults.full_name),
        ("email", &defaults.email),
        ("phone", &defaults.phone),
        ("address", &defaults.address),
        ("city", &defaults.city),
        ("zip", &defaults.zip),
    ];
    if prefills.iter().any(|(_, value)| value.is_some()) {
        ctx.output.info("");
        ctx.output.info("[checkout]");
        for (key, value) in prefills {
            if let Some(value) = value {
                ctx.output.kv(key, value);
            }
        }
    }

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("corner.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config(&ctx.config.shop.name))?;
    ctx.output
        .success(&format!("Created {}", config_path.display()));

    Ok(())
}

async fn show_path(ctx: &Context) -> Result<()> {
    let dir = ctx.profile_dir();

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "profile_dir": dir, "key": ctx.config.storage.key }));
        return Ok(());
    }

    ctx.output.kv("Profile", &dir.display().to_string());
    ctx.output.kv("Cart key", &ctx.config.storage.key);

    Ok(())
}
