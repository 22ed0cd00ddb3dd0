//! Product types.

use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};

/// Product availability in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductStatus {
    /// Product can be added to the cart.
    #[default]
    #[serde(rename = "available", alias = "disponible")]
    Available,
    /// Product is shown but cannot be purchased.
    #[serde(rename = "sold_out", alias = "agotado")]
    SoldOut,
}

impl ProductStatus {
    /// Customer-facing availability label.
    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Available => "Disponible",
            ProductStatus::SoldOut => "Agotado",
        }
    }
}

/// A product in the page catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Short description shown on the card.
    #[serde(default)]
    pub description: String,
    /// Category this product is listed under.
    pub category: CategoryId,
    /// Regular price.
    #[serde(with = "money::decimal")]
    pub price: Money,
    /// Promotional price, shown next to the struck-through regular price.
    #[serde(default, with = "money::decimal::option", skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<Money>,
    /// Availability.
    #[serde(default)]
    pub status: ProductStatus,
    /// Image URL or asset path.
    #[serde(default)]
    pub image: String,
    /// Short label such as "Nuevo" or "Oferta".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl Product {
    /// Create a new available product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<CategoryId>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: category.into(),
            price,
            discount_price: None,
            status: ProductStatus::Available,
            image: String::new(),
            badge: None,
        }
    }

    /// Set the discount price.
    pub fn with_discount(mut self, discount: Money) -> Self {
        self.discount_price = Some(discount);
        self
    }

    /// Set the availability.
    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the badge label.
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Check if the product can be added to a cart.
    pub fn is_available(&self) -> bool {
        self.status == ProductStatus::Available
    }

    /// The discount in effect, if any. A zero discount counts as none.
    pub fn active_discount(&self) -> Option<Money> {
        self.discount_price.filter(Money::is_positive)
    }

    /// The price charged per unit: the discount in effect, else the price.
    pub fn unit_price(&self) -> Money {
        self.active_discount().unwrap_or(self.price)
    }

    /// Check the product against the data-model constraints.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if !self.price.is_positive() {
            return Err(CommerceError::InvalidPrice {
                product_id: self.id.to_string(),
                price: self.price.display(),
            });
        }
        if let Some(discount) = self.active_discount() {
            if discount.amount_cents >= self.price.amount_cents {
                return Err(CommerceError::DiscountNotBelowPrice {
                    product_id: self.id.to_string(),
                    price: self.price.display(),
                    discount: discount.display(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_price_prefers_discount() {
        let product = Product::new("gpu-1", "RTX", "gpu", Money::lempiras(100.0))
            .with_discount(Money::lempiras(80.0));
        assert_eq!(product.unit_price(), Money::lempiras(80.0));
    }

    #[test]
    fn test_zero_discount_is_ignored() {
        let product = Product::new("gpu-1", "RTX", "gpu", Money::lempiras(100.0))
            .with_discount(Money::lempiras(0.0));
        assert_eq!(product.active_discount(), None);
        assert_eq!(product.unit_price(), Money::lempiras(100.0));
    }

    #[test]
    fn test_validate() {
        let ok = Product::new("a", "A", "cpu", Money::lempiras(10.0));
        assert!(ok.validate().is_ok());

        let free = Product::new("b", "B", "cpu", Money::lempiras(0.0));
        assert!(matches!(free.validate(), Err(CommerceError::InvalidPrice { .. })));

        let bad = Product::new("c", "C", "cpu", Money::lempiras(10.0))
            .with_discount(Money::lempiras(12.0));
        assert!(matches!(
            bad.validate(),
            Err(CommerceError::DiscountNotBelowPrice { .. })
        ));
    }

    #[test]
    fn test_deserialize_page_data_fields() {
        let json = r#"{
            "id": "cpu-1",
            "name": "Ryzen 5 5600",
            "description": "6 núcleos",
            "category": "cpu",
            "price": 3200,
            "discountPrice": 2999.5,
            "status": "agotado",
            "image": "/img/cpu-1.webp",
            "badge": "Oferta"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "cpu-1");
        assert_eq!(product.price.amount_cents, 320000);
        assert_eq!(product.discount_price, Some(Money::lempiras(2999.5)));
        assert_eq!(product.status, ProductStatus::SoldOut);
        assert_eq!(product.badge.as_deref(), Some("Oferta"));
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{"id": "x", "name": "X", "category": "ram", "price": 50}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.is_available());
        assert_eq!(product.discount_price, None);
        assert_eq!(product.badge, None);
        assert!(product.description.is_empty());
    }

    #[test]
    fn test_status_names() {
        let parsed: ProductStatus = serde_json::from_str(r#""disponible""#).unwrap();
        assert_eq!(parsed, ProductStatus::Available);
        assert_eq!(ProductStatus::SoldOut.label(), "Agotado");
        assert_eq!(
            serde_json::to_string(&ProductStatus::SoldOut).unwrap(),
            r#""sold_out""#
        );
    }
}
