//! Catalog, cart and checkout logic for the Partes PC storefront.
//!
//! - **Catalog**: products, component categories, and the per-page category index
//! - **Cart**: an in-memory cart store keyed by product id
//! - **Checkout**: the simulated payment step
//! - **Data**: providers that supply page data by page key
//!
//! # Example
//!
//! ```rust
//! use partes_commerce::prelude::*;
//!
//! let catalog = Catalog::new(
//!     vec![Product::new("ssd-1", "SSD 1TB", "almacenamiento", Money::lempiras(1899.0))],
//!     vec![Category::new("almacenamiento", "Almacenamiento")],
//! );
//!
//! let mut cart = CartStore::new();
//! cart.add(&catalog, "ssd-1");
//! cart.add(&catalog, "ssd-1");
//! assert_eq!(cart.total(&catalog).display(), "L 3798.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod data;

pub use error::CommerceError;
pub use ids::*;
pub use money::{format_currency, Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{format_currency, Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product, ProductStatus};

    // Cart
    pub use crate::cart::{AddOutcome, CartEntry, CartLine, CartStore, CartSummary, RejectReason};

    // Checkout
    pub use crate::checkout::{checkout, CheckoutOutcome};

    // Data
    pub use crate::data::{DataProvider, JsonDirProvider, PageData, StaticProvider};
}
