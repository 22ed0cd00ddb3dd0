//! Cart store and entries.

use crate::cart::{CartLine, CartSummary};
use crate::catalog::Catalog;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product reference and its quantity.
///
/// The product id is a weak reference into the catalog; the entry does not
/// own product data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartEntry {
    /// Referenced product.
    pub product_id: ProductId,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

/// Why an add request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The id does not resolve to a catalog product.
    UnknownProduct,
    /// The product is sold out.
    SoldOut,
}

/// Result of [`CartStore::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new entry with quantity 1 was appended.
    Added,
    /// An existing entry was incremented to `quantity`.
    Incremented { quantity: u32 },
    /// The cart is unchanged.
    Rejected(RejectReason),
}

impl AddOutcome {
    /// Whether the cart changed.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, AddOutcome::Rejected(_))
    }
}

/// The session shopping cart: an ordered list of entries, unique by product.
///
/// Not persisted; a new store starts empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartStore {
    entries: Vec<CartEntry>,
    #[serde(default)]
    currency: Currency,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Unknown and sold-out products are rejected and leave the cart as is.
    pub fn add(&mut self, catalog: &Catalog, product_id: &str) -> AddOutcome {
        let Some(product) = catalog.product(product_id) else {
            tracing::debug!(product_id, "add ignored: unknown product");
            return AddOutcome::Rejected(RejectReason::UnknownProduct);
        };
        if !product.is_available() {
            tracing::debug!(product_id, "add ignored: sold out");
            return AddOutcome::Rejected(RejectReason::SoldOut);
        }

        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|e| e.product_id.as_str() == product_id)
        {
            existing.quantity = existing.quantity.saturating_add(1);
            tracing::debug!(product_id, quantity = existing.quantity, "cart entry incremented");
            return AddOutcome::Incremented {
                quantity: existing.quantity,
            };
        }

        self.entries.push(CartEntry {
            product_id: product.id.clone(),
            quantity: 1,
        });
        tracing::debug!(product_id, "cart entry added");
        AddOutcome::Added
    }

    /// Remove a product's entry entirely, whatever its quantity.
    ///
    /// Returns whether an entry was removed; removing an absent id is a no-op.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|e| e.product_id.as_str() != product_id);
        let removed = self.entries.len() < len_before;
        if removed {
            tracing::debug!(product_id, "cart entry removed");
        }
        removed
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Quantity held for a product, 0 if absent.
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.entries
            .iter()
            .find(|e| e.product_id.as_str() == product_id)
            .map(|e| e.quantity)
            .unwrap_or(0)
    }

    /// Sum of quantities across entries.
    pub fn item_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Price every entry against the catalog.
    ///
    /// Entries whose product no longer resolves are skipped and contribute
    /// nothing to the total, but stay in the store. So are entries whose line
    /// total would overflow; the total is always the sum of the lines.
    pub fn summarize(&self, catalog: &Catalog) -> CartSummary {
        let mut lines = Vec::with_capacity(self.entries.len());
        let mut total = Money::zero(self.currency);
        let mut orphaned = 0;
        let mut overflowed = 0;

        for entry in &self.entries {
            let Some(product) = catalog.product(entry.product_id.as_str()) else {
                orphaned += 1;
                continue;
            };
            let unit_price = product.unit_price();
            let priced = unit_price
                .try_multiply(i64::from(entry.quantity))
                .and_then(|line_total| total.try_add(&line_total).map(|sum| (line_total, sum)));
            let Some((line_total, sum)) = priced else {
                tracing::warn!(
                    product_id = %entry.product_id,
                    quantity = entry.quantity,
                    "cart line overflows the total"
                );
                overflowed += 1;
                continue;
            };
            total = sum;
            lines.push(CartLine {
                product_id: entry.product_id.clone(),
                name: product.name.clone(),
                quantity: entry.quantity,
                unit_price,
                line_total,
            });
        }

        CartSummary {
            lines,
            total,
            orphaned,
            overflowed,
        }
    }

    /// Cart total against the catalog.
    pub fn total(&self, catalog: &Catalog) -> Money {
        self.summarize(catalog).total
    }
}
