//! Component categories.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A component category (processor, graphics card, memory...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Category key products refer to.
    pub id: CategoryId,
    /// Human-readable name used in the product-list title.
    #[serde(alias = "nombre")]
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
