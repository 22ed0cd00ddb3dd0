//! Section renderers for the storefront page.
//!
//! Renderers are pure: they turn catalog and cart data into HTML strings and
//! leave DOM placement to the caller.

mod cart;
mod catalog;

pub use cart::*;
pub use catalog::*;

/// CSS class of add-to-cart buttons.
pub const ADD_TO_CART_CLASS: &str = "btn-agregar-carrito";
/// CSS class of remove-from-cart buttons.
pub const REMOVE_CLASS: &str = "btn-eliminar";

/// Every class the section renderers emit.
///
/// The markup only exists at runtime, so stylesheet purging must treat
/// these as used.
pub const RENDERED_CLASSES: &[&str] = &[
    "btn",
    "btn-primary",
    "btn-link",
    ADD_TO_CART_CLASS,
    REMOVE_CLASS,
    "mensaje-vacio",
    "producto-card",
    "producto-badge",
    "producto-imagen",
    "producto-nombre",
    "producto-descripcion",
    "producto-precio",
    "precio-tachado",
    "precio-descuento",
    "producto-stock",
    "disponible",
    "agotado",
    "carrito-item",
    "carrito-item-info",
    "carrito-item-acciones",
];
