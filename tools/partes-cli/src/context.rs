//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::{PartesConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Site configuration.
    pub config: PartesConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context, reading the config from `config_path` or the nearest
    /// config file above the working directory.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(resolve(&cwd, path)),
            None => find_config(&cwd),
        };

        let config = match &config_path {
            Some(path) => PartesConfig::load(path)?,
            None => PartesConfig::default(),
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Directory config paths are relative to: the config file's directory,
    /// or the working directory when running on defaults.
    pub fn project_dir(&self) -> PathBuf {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.cwd.clone())
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn resolve(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Find the nearest config file walking up from `start`.
fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("site").join("data");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("partes.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(dir.path().join("partes.toml")));
    }

    #[test]
    fn test_find_config_prefers_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("partes.json"), "{}").unwrap();
        std::fs::write(dir.path().join("partes.toml"), "").unwrap();

        assert_eq!(find_config(dir.path()), Some(dir.path().join("partes.toml")));
    }

    #[test]
    fn test_project_dir_follows_config_file() {
        let ctx = Context {
            config: PartesConfig::default(),
            config_path: Some(PathBuf::from("/srv/tienda/partes.toml")),
            output: Output::new(false, true),
            cwd: PathBuf::from("/srv/tienda/site"),
        };
        assert_eq!(ctx.project_dir(), PathBuf::from("/srv/tienda"));
        assert_eq!(ctx.resolve_path("dist"), PathBuf::from("/srv/tienda/site/dist"));
    }
}
