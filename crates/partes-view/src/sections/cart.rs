//! Cart renderer.

use partes_commerce::cart::{CartLine, CartSummary};

use super::REMOVE_CLASS;
use crate::escape::escape_html;
use crate::messages;

/// Rendered cart state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Markup for the cart items container.
    pub items_html: String,
    /// Text for the total display.
    pub total_text: String,
    /// Whether the empty-cart message is shown.
    pub show_empty_message: bool,
}

/// Render the cart from its priced summary.
///
/// The empty message depends on the store being empty, not on the number of
/// resolvable lines: a cart holding only orphaned entries renders no rows
/// and keeps the message hidden.
pub fn render_cart(summary: &CartSummary, store_is_empty: bool) -> CartView {
    if store_is_empty {
        return CartView {
            items_html: String::new(),
            total_text: summary.total.display(),
            show_empty_message: true,
        };
    }

    CartView {
        items_html: summary.lines.iter().map(render_cart_line).collect(),
        total_text: summary.total.display(),
        show_empty_message: false,
    }
}

/// Render one cart row.
pub fn render_cart_line(line: &CartLine) -> String {
    format!(
        r#"<div class="carrito-item">
    <div class="carrito-item-info">
        <h4>{name}</h4>
        <p>Cantidad: {quantity}</p>
    </div>
    <div class="carrito-item-acciones">
        <p>{line_total}</p>
        <button class="btn btn-link {remove_class}" data-id="{id}">{remove_label}</button>
    </div>
</div>"#,
        name = escape_html(&line.name),
        quantity = line.quantity,
        line_total = line.line_total.display(),
        remove_class = REMOVE_CLASS,
        id = escape_html(line.product_id.as_str()),
        remove_label = messages::REMOVE,
    )
}
