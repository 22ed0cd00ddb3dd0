//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_NAMES};
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
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let site = &ctx.config.site;
    ctx.output.info("[site]");
    ctx.output.kv("name", &site.name);
    ctx.output.kv("base", &site.base);

    let build = &ctx.config.build;
    ctx.output.info("[build]");
    ctx.output.kv("root", &build.root);
    ctx.output.kv("out_dir", &build.out_dir);
    ctx.output.kv("data_dir", &build.data_dir);
    ctx.output.kv("partials_dir", &build.partials_dir);
    ctx.output.kv("public_dir", &build.public_dir);
    ctx.output.kv("minify", &build.minify.to_string());
    ctx.output.kv("purge_css", &build.purge_css.to_string());
    ctx.output.kv("ignore", &build.ignore.join(", "));

    if !build.styles.is_empty() {
        ctx.output.info("Stylesheets:");
        for style in &build.styles {
            ctx.output.list_item(style);
        }
    }
    if !build.safelist.is_empty() {
        ctx.output.kv("safelist", &build.safelist.join(", "));
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let name = ctx
        .cwd
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("partes-pc");

    fs::write(&config_path, generate_default_config(name))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut report = ctx.config.check();

    let project_dir = ctx.project_dir();
    let build = &ctx.config.build;
    if !project_dir.join(&build.root).is_dir() {
        report
            .errors
            .push(format!("build.root '{}' does not exist", build.root));
    }
    if !project_dir.join(&build.data_dir).is_dir() {
        report.warnings.push(format!(
            "build.data_dir '{}' does not exist; pages render without data",
            build.data_dir
        ));
    }
    for style in &build.styles {
        if !project_dir.join(style).is_file() {
            report
                .errors
                .push(format!("stylesheet '{}' does not exist", style));
        }
    }

    if report.is_clean() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &report.errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &report.warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !report.errors.is_empty() {
        bail!("Configuration has {} error(s)", report.errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
