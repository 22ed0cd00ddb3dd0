//! Shopping cart module.
//!
//! Contains the cart store, its entries, and the priced summary used for
//! rendering.

mod cart;
mod pricing;

pub use cart::{AddOutcome, CartEntry, CartStore, RejectReason};
pub use pricing::{CartLine, CartSummary};
