//! Storefront page configuration.

use serde::{Deserialize, Serialize};

use crate::dom::DomIds;

/// Per-page storefront settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Page key passed to the data provider.
    pub page: String,
    /// Element ids to render into.
    pub ids: DomIds,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            page: "index".to_string(),
            ids: DomIds::default(),
        }
    }
}

impl StorefrontConfig {
    /// Parse from JSON, e.g. the `data-storefront` attribute on `<body>`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
