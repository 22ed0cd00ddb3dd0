//! Entry page discovery.

use std::path::{Path, PathBuf};

use super::{io_error, SiteError};

/// An HTML page to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Path below the site root without extension, `/`-separated
    /// (`"index"`, `"ofertas/gpu"`).
    pub name: String,
    /// Data page key: the file stem.
    pub page: String,
    /// Source file.
    pub source: PathBuf,
}

impl Entry {
    /// Output path relative to the output directory.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.html", self.name))
    }
}

/// Find every `*.html` file under `root`, skipping directories named in
/// `ignore` and hidden directories. Entries are sorted by name.
pub fn discover(root: &Path, ignore: &[String]) -> Result<Vec<Entry>, SiteError> {
    if !root.is_dir() {
        return Err(SiteError::MissingRoot(root.to_path_buf()));
    }

    let mut entries = Vec::new();
    walk(root, root, ignore, &mut entries)?;
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    if entries.is_empty() {
        return Err(SiteError::NoEntries(root.to_path_buf()));
    }
    Ok(entries)
}

fn walk(root: &Path, dir: &Path, ignore: &[String], out: &mut Vec<Entry>) -> Result<(), SiteError> {
    let read = std::fs::read_dir(dir).map_err(io_error(dir))?;

    for item in read {
        let item = item.map_err(io_error(dir))?;
        let path = item.path();
        let file_name = item.file_name();
        let file_name = file_name.to_string_lossy();

        if path.is_dir() {
            if file_name.starts_with('.') || ignore.iter().any(|i| i.as_str() == file_name.as_ref()) {
                tracing::debug!(dir = %path.display(), "skipping directory");
                continue;
            }
            walk(root, &path, ignore, out)?;
            continue;
        }

        if path.extension().is_some_and(|ext| ext == "html") {
            if let Some(entry) = entry_for(root, &path) {
                out.push(entry);
            }
        }
    }
    Ok(())
}

fn entry_for(root: &Path, path: &Path) -> Option<Entry> {
    let relative = path.strip_prefix(root).ok()?.with_extension("");
    let name = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    let page = path.file_stem()?.to_string_lossy().into_owned();

    Some(Entry {
        name,
        page,
        source: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "<html></html>").unwrap();
    }

    #[test]
    fn test_discovers_nested_pages() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "index.html");
        touch(dir.path(), "ofertas/gpu.html");
        touch(dir.path(), "styles/main.css");

        let entries = discover(dir.path(), &[]).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["index", "ofertas/gpu"]);
        assert_eq!(entries[1].page, "gpu");
        assert_eq!(entries[1].output_path(), PathBuf::from("ofertas/gpu.html"));
    }

    #[test]
    fn test_ignored_directories_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "index.html");
        touch(dir.path(), "dist/index.html");
        touch(dir.path(), "node_modules/pkg/readme.html");
        touch(dir.path(), ".cache/page.html");

        let ignore = vec!["dist".to_string(), "node_modules".to_string()];
        let entries = discover(dir.path(), &ignore).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "index");
    }

    #[test]
    fn test_empty_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            discover(dir.path(), &[]),
            Err(SiteError::NoEntries(_))
        ));
        assert!(matches!(
            discover(&dir.path().join("missing"), &[]),
            Err(SiteError::MissingRoot(_))
        ));
    }
}
