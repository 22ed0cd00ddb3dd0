//! Cart pricing breakdown.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Priced view of the cart for rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// One line per resolvable entry, in cart order.
    pub lines: Vec<CartLine>,
    /// Sum of line totals.
    pub total: Money,
    /// Entries skipped because their product is no longer in the catalog.
    pub orphaned: usize,
    /// Entries skipped because their line total does not fit in the total.
    pub overflowed: usize,
}

impl CartSummary {
    /// Check if there is nothing to display.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A priced cart entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    /// Product name at render time.
    pub name: String,
    pub quantity: u32,
    /// Discount price if present, else regular price.
    pub unit_price: Money,
    /// unit_price * quantity.
    pub line_total: Money,
}
