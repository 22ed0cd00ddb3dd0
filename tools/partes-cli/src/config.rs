//! Site build configuration (`partes.toml`).

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["partes.toml", ".partes.toml", "partes.json"];

/// Site build configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartesConfig {
    /// Site metadata.
    #[serde(default)]
    pub site: SiteConfig,

    /// Build configuration.
    #[serde(default)]
    pub build: BuildConfig,
}

impl PartesConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Problems that make a build impossible, and questionable settings.
    pub fn check(&self) -> ConfigReport {
        let mut report = ConfigReport::default();

        if self.site.name.trim().is_empty() {
            report.errors.push("site.name is required".to_string());
        }

        if !self.site.base.starts_with('/') {
            report
                .errors
                .push(format!("site.base '{}' must start with '/'", self.site.base));
        } else if !self.site.base.ends_with('/') {
            report
                .warnings
                .push(format!("site.base '{}' should end with '/'", self.site.base));
        }

        let out_dir = Path::new(&self.build.out_dir);
        if self.build.out_dir.trim().is_empty() || out_dir == Path::new(".") {
            report
                .errors
                .push("build.out_dir must name a dedicated directory".to_string());
        } else if Path::new(&self.build.root).starts_with(out_dir) {
            report.errors.push(format!(
                "build.out_dir '{}' contains build.root; it is emptied on every build",
                self.build.out_dir
            ));
        }

        if self.build.styles.is_empty() && self.build.purge_css {
            report
                .warnings
                .push("build.purge_css is set but no build.styles are listed".to_string());
        }

        for style in &self.build.styles {
            if !style.ends_with(".css") {
                report
                    .warnings
                    .push(format!("build.styles entry '{}' is not a .css file", style));
            }
        }

        report
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Outcome of [`PartesConfig::check`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ConfigReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Site metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site name.
    #[serde(default = "default_name")]
    pub name: String,

    /// Public base path the site is served under.
    #[serde(default = "default_base")]
    pub base: String,
}

fn default_name() -> String {
    "partes-pc".to_string()
}

fn default_base() -> String {
    "/Partes_PC/".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            base: default_base(),
        }
    }
}

/// Build configuration. Paths are relative to the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory scanned for `*.html` entries.
    pub root: String,

    /// Output directory, emptied before each build.
    pub out_dir: String,

    /// Directory of `<page>.json` data files.
    pub data_dir: String,

    /// Directory of handlebars partials.
    pub partials_dir: String,

    /// Directory copied verbatim into the output.
    pub public_dir: String,

    /// Stylesheets copied into `assets/`.
    pub styles: Vec<String>,

    /// Minify pages and stylesheets.
    pub minify: bool,

    /// Drop CSS rules no page can match.
    pub purge_css: bool,

    /// Extra class names the purge step keeps.
    pub safelist: Vec<String>,

    /// Directory names skipped during entry discovery.
    pub ignore: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root: "site".to_string(),
            out_dir: "dist".to_string(),
            data_dir: "site/data".to_string(),
            partials_dir: "site/partials".to_string(),
            public_dir: "site/public".to_string(),
            styles: vec!["site/styles/main.css".to_string()],
            minify: true,
            purge_css: true,
            safelist: Vec::new(),
            ignore: vec![
                "dist".to_string(),
                "node_modules".to_string(),
                "target".to_string(),
            ],
        }
    }
}

/// Generate a default partes.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Partes PC site build configuration

[site]
name = "{name}"
base = "/Partes_PC/"

[build]
root = "site"
out_dir = "dist"
data_dir = "site/data"
partials_dir = "site/partials"
public_dir = "site/public"
styles = ["site/styles/main.css"]
minify = true
purge_css = true
# safelist = ["is-open"]
ignore = ["dist", "node_modules", "target"]
"#,
        name = name
    )
}
