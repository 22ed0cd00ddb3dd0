//! Rendering and interaction layer for the Partes PC storefront.
//!
//! - `sections` renders catalog and cart state to HTML fragments
//! - `dom` defines the element operations the storefront performs
//! - `events` maps delegated clicks to [`StoreEvent`]s
//! - [`Storefront`] owns the state and applies events
//!
//! Nothing here depends on a browser. The wasm binding supplies a [`Dom`]
//! and a [`Notifier`] backed by `web-sys`.

pub mod config;
pub mod dom;
pub mod escape;
pub mod events;
pub mod messages;
pub mod notify;
pub mod sections;
mod storefront;

#[cfg(test)]
mod testing;

pub use config::StorefrontConfig;
pub use dom::{Dom, DomIds};
pub use events::{resolve_click, ClickTarget, StoreEvent};
pub use notify::{Notice, NoticeKind, NoticeLog, Notifier};
pub use storefront::{EventOutcome, QuoteDelivery, Storefront};
