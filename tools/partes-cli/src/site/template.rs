//! Handlebars page rendering.

use std::path::Path;

use handlebars::Handlebars;
use partes_commerce::data::PageData;
use serde::Serialize;

use super::{io_error, SiteError};

/// Values available to page templates.
///
/// Page data fields sit at the top level, so a template iterates
/// `{{#each components}}` and `{{#each products}}` directly.
#[derive(Debug, Serialize)]
pub struct PageContext<'a> {
    #[serde(flatten)]
    pub data: &'a PageData,
    /// Public base path, e.g. `/Partes_PC/`.
    pub base: &'a str,
    /// Site name from config.
    pub site_name: &'a str,
    /// Entry name of the page being rendered.
    pub page: &'a str,
}

/// Template registry holding the site partials.
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Self {
        Self {
            registry: Handlebars::new(),
        }
    }

    /// Register every `*.hbs` and `*.html` file of `dir` as a partial named
    /// by its file stem. A missing directory registers nothing.
    pub fn with_partials_dir(dir: &Path) -> Result<Self, SiteError> {
        let mut renderer = Self::new();
        if !dir.is_dir() {
            tracing::debug!(dir = %dir.display(), "no partials directory");
            return Ok(renderer);
        }

        for item in std::fs::read_dir(dir).map_err(io_error(dir))? {
            let path = item.map_err(io_error(dir))?.path();
            let is_partial = path
                .extension()
                .is_some_and(|ext| ext == "hbs" || ext == "html");
            let Some(name) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
                continue;
            };
            if !path.is_file() || !is_partial {
                continue;
            }
            let source = std::fs::read_to_string(&path).map_err(io_error(&path))?;
            renderer.register_partial(&name, &source)?;
        }
        Ok(renderer)
    }

    pub fn register_partial(&mut self, name: &str, source: &str) -> Result<(), SiteError> {
        self.registry
            .register_partial(name, source)
            .map_err(|err| SiteError::Partial {
                name: name.to_string(),
                source: Box::new(err),
            })?;
        tracing::debug!(partial = name, "registered partial");
        Ok(())
    }

    /// Render one page source against `context`.
    pub fn render(&self, entry: &str, source: &str, context: &PageContext<'_>) -> Result<String, SiteError> {
        self.registry
            .render_template(source, context)
            .map_err(|err| SiteError::Render {
                entry: entry.to_string(),
                source: Box::new(err),
            })
    }
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new()
    }
}
