//! Product catalog module.
//!
//! Contains the product and category types and the per-page category index.

mod category;
mod index;
mod product;

pub use category::Category;
pub use index::Catalog;
pub use product::{Product, ProductStatus};
