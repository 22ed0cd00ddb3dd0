//! Static site build pipeline.
//!
//! Entries are discovered under the site root, rendered with handlebars
//! against their page data, then rewritten for the base path and written to
//! the output directory alongside purged, minified stylesheets.

pub mod entries;
pub mod minify;
pub mod purge;
pub mod template;
pub mod urls;

use std::path::{Path, PathBuf};

use partes_commerce::data::{DataProvider, JsonDirProvider};
use partes_commerce::CommerceError;
use thiserror::Error;

use crate::config::PartesConfig;
use entries::Entry;
use purge::Purger;
use template::{PageContext, PageRenderer};
use urls::UrlRewriter;

/// Site build errors.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("site root not found: {0}")]
    MissingRoot(PathBuf),

    #[error("no .html entries found under {0}")]
    NoEntries(PathBuf),

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid partial '{name}': {source}")]
    Partial {
        name: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("failed to render '{entry}': {source}")]
    Render {
        entry: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    #[error("page data for '{page}': {source}")]
    Data {
        page: String,
        #[source]
        source: CommerceError,
    },

    #[error("refusing to empty {0}: it contains the site sources")]
    UnsafeOutDir(PathBuf),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Map an IO error to [`SiteError::Io`] for `path`.
pub(crate) fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// A rendered entry, before URL rewriting and minification.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub entry: Entry,
    pub html: String,
}

/// A processed stylesheet.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// URL pages reference it by, relative to the site root.
    pub url: String,
    /// Output path relative to the output directory.
    pub output: String,
    pub css: String,
    pub original_bytes: u64,
}

/// Summary of a finished build.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    pub pages: Vec<WrittenFile>,
    pub stylesheets: Vec<WrittenFile>,
    pub public_files: usize,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct WrittenFile {
    pub path: String,
    pub bytes: u64,
}

/// Build settings resolved against the project directory.
#[derive(Debug, Clone)]
pub struct SiteBuilder {
    root: PathBuf,
    out_dir: PathBuf,
    data_dir: PathBuf,
    partials_dir: PathBuf,
    public_dir: PathBuf,
    styles: Vec<PathBuf>,
    base: String,
    site_name: String,
    minify: bool,
    purge_css: bool,
    safelist: Vec<String>,
    ignore: Vec<String>,
}

impl SiteBuilder {
    pub fn from_config(config: &PartesConfig, project_dir: &Path) -> Self {
        let build = &config.build;
        Self {
            root: project_dir.join(&build.root),
            out_dir: project_dir.join(&build.out_dir),
            data_dir: project_dir.join(&build.data_dir),
            partials_dir: project_dir.join(&build.partials_dir),
            public_dir: project_dir.join(&build.public_dir),
            styles: build.styles.iter().map(|s| project_dir.join(s)).collect(),
            base: config.site.base.clone(),
            site_name: config.site.name.clone(),
            minify: build.minify,
            purge_css: build.purge_css,
            safelist: build.safelist.clone(),
            ignore: build.ignore.clone(),
        }
    }

    /// Override the output directory.
    pub fn with_out_dir(mut self, out_dir: PathBuf) -> Self {
        self.out_dir = out_dir;
        self
    }

    /// Override minification.
    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Find the entry pages.
    pub fn discover(&self) -> Result<Vec<Entry>, SiteError> {
        entries::discover(&self.root, &self.ignore)
    }

    /// Template registry with the site partials loaded.
    pub fn renderer(&self) -> Result<PageRenderer, SiteError> {
        PageRenderer::with_partials_dir(&self.partials_dir)
    }

    /// Render one entry with an already loaded registry.
    pub fn render_entry(
        &self,
        renderer: &PageRenderer,
        entry: &Entry,
    ) -> Result<RenderedPage, SiteError> {
        let source = std::fs::read_to_string(&entry.source).map_err(io_error(&entry.source))?;
        let data = JsonDirProvider::new(&self.data_dir)
            .page_data(&entry.page)
            .map_err(|source| SiteError::Data {
                page: entry.page.clone(),
                source,
            })?;
        let context = PageContext {
            data: &data,
            base: &self.base,
            site_name: &self.site_name,
            page: &entry.name,
        };
        let html = renderer.render(&entry.name, &source, &context)?;
        tracing::debug!(
            entry = %entry.name,
            products = data.products.len(),
            components = data.components.len(),
            "rendered page"
        );
        Ok(RenderedPage {
            entry: entry.clone(),
            html,
        })
    }

    /// Load the configured stylesheets, purged against `pages` and minified
    /// as configured.
    pub fn stylesheets(&self, pages: &[RenderedPage]) -> Result<Vec<Stylesheet>, SiteError> {
        let purger = if self.purge_css {
            let mut purger = Purger::new()?;
            for page in pages {
                purger.scan_html(&page.html);
            }
            purger.keep_classes(partes_view::sections::RENDERED_CLASSES.iter().copied());
            purger.keep_classes(self.safelist.iter().cloned());
            Some(purger)
        } else {
            None
        };

        self.styles
            .iter()
            .map(|path| {
                let original = std::fs::read_to_string(path).map_err(io_error(path))?;
                let mut css = match &purger {
                    Some(purger) => purger.purge(&original),
                    None => original.clone(),
                };
                if self.minify {
                    css = minify::minify_css(&css);
                }
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "styles.css".to_string());
                Ok(Stylesheet {
                    url: self.site_url(path),
                    output: format!("assets/{file_name}"),
                    css,
                    original_bytes: original.len() as u64,
                })
            })
            .collect()
    }

    /// Empty the output directory and write pages, stylesheets and public
    /// files into it.
    pub fn write(
        &self,
        pages: &[RenderedPage],
        stylesheets: &[Stylesheet],
    ) -> Result<BuildReport, SiteError> {
        self.reset_out_dir()?;

        let mut rewriter = UrlRewriter::new(&self.base)?;
        for sheet in stylesheets {
            rewriter.map_asset(sheet.url.clone(), sheet.output.clone());
        }

        let mut report = BuildReport {
            out_dir: self.out_dir.clone(),
            ..BuildReport::default()
        };

        if self.public_dir.is_dir() {
            report.public_files = copy_dir(&self.public_dir, &self.out_dir)?;
        }

        for sheet in stylesheets {
            let bytes = self.write_file(&sheet.output, &sheet.css)?;
            report.stylesheets.push(WrittenFile {
                path: sheet.output.clone(),
                bytes,
            });
        }

        for page in pages {
            let mut html = rewriter.rewrite(&page.html);
            if self.minify {
                html = minify::minify_html(&html);
            }
            let path = page.entry.output_path().to_string_lossy().replace('\\', "/");
            let bytes = self.write_file(&path, &html)?;
            report.pages.push(WrittenFile { path, bytes });
        }

        Ok(report)
    }

    /// `/`-prefixed URL of a file under the site root, or its bare file name
    /// when it lives elsewhere.
    fn site_url(&self, path: &Path) -> String {
        let relative = path
            .strip_prefix(&self.root)
            .ok()
            .map(|rel| rel.to_string_lossy().replace('\\', "/"))
            .or_else(|| path.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_default();
        format!("/{relative}")
    }

    fn reset_out_dir(&self) -> Result<(), SiteError> {
        if self.root.starts_with(&self.out_dir) {
            return Err(SiteError::UnsafeOutDir(self.out_dir.clone()));
        }
        if self.out_dir.exists() {
            std::fs::remove_dir_all(&self.out_dir).map_err(io_error(&self.out_dir))?;
        }
        std::fs::create_dir_all(&self.out_dir).map_err(io_error(&self.out_dir))
    }

    fn write_file(&self, relative: &str, content: &str) -> Result<u64, SiteError> {
        let path = self.out_dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error(parent))?;
        }
        std::fs::write(&path, content).map_err(io_error(&path))?;
        Ok(content.len() as u64)
    }
}

/// Recursively copy `from` into `to`, returning the number of files.
fn copy_dir(from: &Path, to: &Path) -> Result<usize, SiteError> {
    std::fs::create_dir_all(to).map_err(io_error(to))?;
    let mut copied = 0;

    for item in std::fs::read_dir(from).map_err(io_error(from))? {
        let item = item.map_err(io_error(from))?;
        let source = item.path();
        let target = to.join(item.file_name());
        if source.is_dir() {
            copied += copy_dir(&source, &target)?;
        } else {
            std::fs::copy(&source, &target).map_err(io_error(&source))?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn render(builder: &SiteBuilder, entries: &[Entry]) -> Result<Vec<RenderedPage>, SiteError> {
        let renderer = builder.renderer()?;
        entries
            .iter()
            .map(|entry| builder.render_entry(&renderer, entry))
            .collect()
    }

    fn build(builder: &SiteBuilder) -> BuildReport {
        let entries = builder.discover().unwrap();
        let pages = render(builder, &entries).unwrap();
        let stylesheets = builder.stylesheets(&pages).unwrap();
        builder.write(&pages, &stylesheets).unwrap()
    }

    fn project() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(
            root,
            "site/index.html",
            "<html>\n<head><link rel=\"stylesheet\" href=\"/styles/main.css\" /></head>\n<body>\n  {{> nav}}<div id=\"lista-productos\"></div>\n</body>\n</html>\n",
        );
        write(
            root,
            "site/partials/nav.hbs",
            "<nav>{{#each components}}<button class=\"btn-componente\" data-category=\"{{id}}\">{{name}}</button>{{/each}}</nav>",
        );
        write(
            root,
            "site/data/index.json",
            r#"{"components": [{"id": "cpu", "nombre": "Procesador"}], "products": []}"#,
        );
        write(
            root,
            "site/styles/main.css",
            "/* storefront */\n.btn-componente { color: blue; }\n.producto-card { padding: 1rem; }\n.skeleton { opacity: 0.5; }\n#lista-productos { display: grid; }\n",
        );
        write(root, "site/public/img/logo.svg", "<svg></svg>");
        write(root, "dist/stale.html", "old");
        dir
    }

    #[test]
    fn test_build_writes_site() {
        let dir = project();
        let builder = SiteBuilder::from_config(&PartesConfig::default(), dir.path());
        let report = build(&builder);

        assert_eq!(report.pages.len(), 1);
        assert_eq!(report.public_files, 1);
        assert!(!dir.path().join("dist/stale.html").exists());
        assert!(dir.path().join("dist/img/logo.svg").exists());

        let html = std::fs::read_to_string(dir.path().join("dist/index.html")).unwrap();
        assert_eq!(
            html,
            "<html><head><link rel=\"stylesheet\" href=\"/Partes_PC/assets/main.css\" /></head><body><nav><button class=\"btn-componente\" data-category=\"cpu\">Procesador</button></nav><div id=\"lista-productos\"></div></body></html>"
        );

        let css = std::fs::read_to_string(dir.path().join("dist/assets/main.css")).unwrap();
        assert_eq!(
            css,
            ".btn-componente{color:blue}.producto-card{padding:1rem}#lista-productos{display:grid}"
        );
    }

    #[test]
    fn test_build_without_minify_or_purge() {
        let dir = project();
        let mut config = PartesConfig::default();
        config.build.minify = false;
        config.build.purge_css = false;
        let report = build(&SiteBuilder::from_config(&config, dir.path()));

        assert_eq!(report.stylesheets[0].path, "assets/main.css");
        let css = std::fs::read_to_string(dir.path().join("dist/assets/main.css")).unwrap();
        assert!(css.contains(".skeleton { opacity: 0.5; }"));
        let html = std::fs::read_to_string(dir.path().join("dist/index.html")).unwrap();
        assert!(html.contains("</nav><div id=\"lista-productos\"></div>\n</body>"));
    }

    #[test]
    fn test_pages_without_data_render_empty() {
        let dir = project();
        write(dir.path(), "site/ofertas/gpu.html", "<ul>{{#each products}}<li>{{name}}</li>{{/each}}</ul>");

        let builder = SiteBuilder::from_config(&PartesConfig::default(), dir.path());
        let entries = builder.discover().unwrap();
        let pages = render(&builder, &entries).unwrap();
        let gpu = pages.iter().find(|p| p.entry.name == "ofertas/gpu").unwrap();
        assert_eq!(gpu.html, "<ul></ul>");
    }

    #[test]
    fn test_invalid_page_data_names_the_page() {
        let dir = project();
        write(dir.path(), "site/data/index.json", "{ not json");

        let builder = SiteBuilder::from_config(&PartesConfig::default(), dir.path());
        let entries = builder.discover().unwrap();
        let err = render(&builder, &entries).unwrap_err();
        assert!(matches!(err, SiteError::Data { ref page, .. } if page == "index"));
    }

    #[test]
    fn test_refuses_out_dir_containing_sources() {
        let dir = project();
        let mut config = PartesConfig::default();
        config.build.out_dir = ".".to_string();
        let builder = SiteBuilder::from_config(&config, dir.path());
        let err = builder.write(&[], &[]).unwrap_err();
        assert!(matches!(err, SiteError::UnsafeOutDir(_)));
        assert!(dir.path().join("site/index.html").exists());
    }
}
