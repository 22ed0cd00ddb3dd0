//! Checkout module.
//!
//! Payment is simulated: checking out only validates and clears the cart.

mod flow;

pub use flow::{checkout, CheckoutOutcome};
