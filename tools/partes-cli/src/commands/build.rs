//! Build the site for deployment.

use anyhow::{Context as _, Result};

use super::BuildArgs;
use crate::context::Context;
use crate::output::format_bytes;
use crate::site::SiteBuilder;

/// Run the build command.
pub fn run(args: BuildArgs, ctx: &Context) -> Result<()> {
    let mut builder = SiteBuilder::from_config(&ctx.config, &ctx.project_dir());
    if let Some(ref out_dir) = args.out_dir {
        builder = builder.with_out_dir(ctx.resolve_path(out_dir));
    }
    if args.no_minify {
        builder = builder.with_minify(false);
    }

    ctx.output.header(&format!("Building {}", ctx.config.site.name));
    match &ctx.config_path {
        Some(path) => ctx.output.debug(&format!("config: {}", path.display())),
        None => ctx.output.debug("no config file found, using defaults"),
    }

    ctx.output.step(1, 4, "Discovering pages");
    let entries = builder.discover().context("Failed to discover pages")?;
    for entry in &entries {
        ctx.output.debug(&format!("{} ({})", entry.name, entry.source.display()));
    }

    ctx.output.step(2, 4, &format!("Rendering {} page(s)", entries.len()));
    let renderer = builder.renderer().context("Failed to load partials")?;
    let progress = ctx.output.progress(entries.len() as u64, "rendering");
    let mut pages = Vec::with_capacity(entries.len());
    for entry in &entries {
        progress.set_message(entry.name.clone());
        pages.push(builder.render_entry(&renderer, entry)?);
        progress.inc(1);
    }
    progress.finish_and_clear();

    ctx.output.step(3, 4, "Processing stylesheets");
    let stylesheets = builder.stylesheets(&pages).context("Failed to process stylesheets")?;
    for sheet in &stylesheets {
        ctx.output.debug(&format!(
            "{}: {} -> {}",
            sheet.url,
            format_bytes(sheet.original_bytes),
            format_bytes(sheet.css.len() as u64)
        ));
    }

    ctx.output.step(4, 4, &format!("Writing {}", builder.out_dir().display()));
    let report = builder
        .write(&pages, &stylesheets)
        .context("Failed to write build output")?;

    tracing::info!(
        pages = report.pages.len(),
        stylesheets = report.stylesheets.len(),
        public_files = report.public_files,
        "build finished"
    );

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    for file in report.pages.iter().chain(&report.stylesheets) {
        ctx.output.kv(&file.path, &format_bytes(file.bytes));
    }
    if report.public_files > 0 {
        ctx.output.kv("public files", &report.public_files.to_string());
    }
    ctx.output.success("Build complete!");
    ctx.output.kv("Output", &report.out_dir.display().to_string());

    Ok(())
}
