//! Simulated checkout.

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Result of a checkout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutOutcome {
    /// Nothing to pay for; the cart is unchanged.
    EmptyCart,
    /// Payment accepted and the cart cleared.
    Completed {
        /// Amount charged.
        total: Money,
        /// Units purchased.
        items: u64,
    },
}

impl CheckoutOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, CheckoutOutcome::Completed { .. })
    }
}

/// Check out the cart.
///
/// An empty cart is left untouched. Otherwise the totals are captured and the
/// cart is cleared.
pub fn checkout(cart: &mut CartStore, catalog: &Catalog) -> CheckoutOutcome {
    if cart.is_empty() {
        tracing::debug!("checkout refused: empty cart");
        return CheckoutOutcome::EmptyCart;
    }

    let total = cart.total(catalog);
    let items = cart.item_count();
    cart.clear();

    tracing::info!(total = %total.display(), items, "checkout completed");
    CheckoutOutcome::Completed { total, items }
}
