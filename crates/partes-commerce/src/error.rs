//! Commerce error types.

use thiserror::Error;

/// Errors raised while loading or validating storefront data.
///
/// Storefront interactions themselves never fail: unknown ids and sold-out
/// products are reported through outcome values instead.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// No data registered for a page key.
    #[error("No data for page: {0}")]
    PageNotFound(String),

    /// Two products share the same id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// A product price is zero or negative.
    #[error("Invalid price for {product_id}: {price}")]
    InvalidPrice { product_id: String, price: String },

    /// A discount price is not below the regular price.
    #[error("Discount for {product_id} ({discount}) is not below price ({price})")]
    DiscountNotBelowPrice {
        product_id: String,
        price: String,
        discount: String,
    },

    /// Page data could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Page data is not valid JSON.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
