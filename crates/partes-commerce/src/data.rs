//! Page data providers.
//!
//! Each page of the site has a data file with its products and component
//! categories. The browser build embeds these files; the site builder reads
//! them from disk to use as template context.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Product};
use crate::error::CommerceError;

/// Data supplied for one page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PageData {
    /// Products offered on the page.
    #[serde(default)]
    pub products: Vec<Product>,
    /// Component categories the products are grouped into.
    #[serde(default)]
    pub components: Vec<Category>,
}

impl PageData {
    /// Parse page data from JSON.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Source of per-page catalog data.
pub trait DataProvider {
    /// Data for a page key (the entry file stem, e.g. `"index"`).
    fn page_data(&self, page: &str) -> Result<PageData, CommerceError>;
}

/// Provider over pages registered in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    pages: HashMap<String, PageData>,
    strict: bool,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with `PageNotFound` for unregistered pages instead of
    /// returning empty data.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Register data for a page.
    pub fn with_page(mut self, page: impl Into<String>, data: PageData) -> Self {
        self.pages.insert(page.into(), data);
        self
    }

    /// Register data for a page from JSON text.
    pub fn with_json(self, page: impl Into<String>, json: &str) -> Result<Self, CommerceError> {
        let data = PageData::from_json(json)?;
        Ok(self.with_page(page, data))
    }
}

impl DataProvider for StaticProvider {
    fn page_data(&self, page: &str) -> Result<PageData, CommerceError> {
        match self.pages.get(page) {
            Some(data) => Ok(data.clone()),
            None if self.strict => Err(CommerceError::PageNotFound(page.to_string())),
            None => Ok(PageData::default()),
        }
    }
}

/// Provider reading `<dir>/<page>.json`.
///
/// Pages without a data file get empty data.
#[derive(Debug, Clone)]
pub struct JsonDirProvider {
    dir: PathBuf,
}

impl JsonDirProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, page: &str) -> PathBuf {
        self.dir.join(format!("{page}.json"))
    }
}

impl DataProvider for JsonDirProvider {
    fn page_data(&self, page: &str) -> Result<PageData, CommerceError> {
        let path = self.path_for(page);
        if !path.exists() {
            tracing::debug!(page, path = %path.display(), "no data file for page");
            return Ok(PageData::default());
        }
        let content = std::fs::read_to_string(&path)?;
        PageData::from_json(&content)
    }
}
