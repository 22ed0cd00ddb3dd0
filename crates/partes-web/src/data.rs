//! Page data embedded in the browser build.

use partes_commerce::catalog::Catalog;
use partes_commerce::data::{DataProvider, StaticProvider};
use partes_commerce::CommerceError;
use partes_view::StorefrontConfig;

const INDEX_DATA: &str = include_str!("../../../site/data/index.json");

/// Provider over the embedded page data files.
pub fn provider() -> Result<StaticProvider, CommerceError> {
    StaticProvider::new().with_json("index", INDEX_DATA)
}

/// Build the catalog for a page key.
pub fn load_catalog(page: &str) -> Result<Catalog, CommerceError> {
    let data = provider()?.page_data(page)?;
    Ok(Catalog::from_page(data))
}

/// Read the storefront config from the body's `data-storefront` attribute.
///
/// A missing attribute yields the defaults; an invalid one is logged and
/// ignored.
pub fn parse_config(attribute: Option<&str>) -> StorefrontConfig {
    match attribute {
        Some(json) => StorefrontConfig::from_json(json).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid data-storefront config, using defaults");
            StorefrontConfig::default()
        }),
        None => StorefrontConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_index_data_parses() {
        let catalog = load_catalog("index").unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.validate().is_empty());

        for category in catalog.categories() {
            assert!(
                !catalog.products_in(category.id.as_str()).is_empty()
                    || category.id.as_str() == "refrigeracion",
                "no products for {}",
                category.id
            );
        }
    }

    #[test]
    fn test_unknown_page_is_empty() {
        assert!(load_catalog("contacto").unwrap().is_empty());
    }

    #[test]
    fn test_parse_config() {
        assert_eq!(parse_config(None), StorefrontConfig::default());
        assert_eq!(parse_config(Some("not json")), StorefrontConfig::default());
        assert_eq!(parse_config(Some(r#"{"page": "ofertas"}"#)).page, "ofertas");
    }
}
