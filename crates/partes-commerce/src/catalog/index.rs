//! Category index over a page's product list.

use std::collections::{HashMap, HashSet};

use crate::catalog::{Category, Product};
use crate::data::PageData;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Immutable catalog for one page, indexed by category and by product id.
///
/// Built once at startup. Products keep their input order inside each
/// category bucket.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    by_category: HashMap<String, Vec<usize>>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Index a product list and its categories.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        let mut by_category: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_id = HashMap::with_capacity(products.len());

        for (pos, product) in products.iter().enumerate() {
            by_category
                .entry(product.category.as_str().to_string())
                .or_default()
                .push(pos);
            // First occurrence wins for id lookups.
            by_id.entry(product.id.as_str().to_string()).or_insert(pos);
        }

        let catalog = Self {
            products,
            categories,
            by_category,
            by_id,
        };

        for problem in catalog.validate() {
            tracing::warn!(error = %problem, "catalog data problem");
        }

        tracing::debug!(
            products = catalog.products.len(),
            categories = catalog.by_category.len(),
            "catalog indexed"
        );

        catalog
    }

    /// Index the data supplied for a page.
    pub fn from_page(data: PageData) -> Self {
        Self::new(data.products, data.components)
    }

    /// Products listed under a category, in input order.
    ///
    /// Unknown categories yield an empty list.
    pub fn products_in(&self, category_id: &str) -> Vec<&Product> {
        self.by_category
            .get(category_id)
            .map(|positions| positions.iter().map(|&i| &self.products[i]).collect())
            .unwrap_or_default()
    }

    /// Look up a product by id.
    pub fn product(&self, product_id: &str) -> Option<&Product> {
        self.by_id.get(product_id).map(|&i| &self.products[i])
    }

    /// Look up a category by id.
    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id.as_str() == category_id)
    }

    /// Display name of a category, if it is known.
    pub fn category_name(&self, category_id: &str) -> Option<&str> {
        self.category(category_id).map(|c| c.name.as_str())
    }

    /// All products, in input order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories, in input order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Collect data problems without rejecting the catalog.
    pub fn validate(&self) -> Vec<CommerceError> {
        let mut problems = Vec::new();
        let mut seen: HashSet<&ProductId> = HashSet::new();

        for product in &self.products {
            if !seen.insert(&product.id) {
                problems.push(CommerceError::DuplicateProduct(product.id.to_string()));
            }
            if let Err(e) = product.validate() {
                problems.push(e);
            }
        }

        problems
    }
}
