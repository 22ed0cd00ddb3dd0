//! DOM contract.
//!
//! The storefront only touches the page through [`Dom`], addressing elements
//! by id. Every operation reports whether the element existed so callers can
//! degrade to a no-op on partially loaded pages.

use serde::{Deserialize, Serialize};

/// Element operations the storefront needs.
pub trait Dom {
    /// Whether an element with this id exists.
    fn has_element(&self, id: &str) -> bool;

    /// Replace an element's children with parsed markup.
    fn set_inner_html(&mut self, id: &str, html: &str) -> bool;

    /// Replace an element's text content.
    fn set_text(&mut self, id: &str, text: &str) -> bool;

    /// Show (`display: block`) or hide (`display: none`) an element.
    fn set_visible(&mut self, id: &str, visible: bool) -> bool;

    /// Smoothly scroll an element into view.
    fn scroll_into_view(&mut self, id: &str) -> bool;

    /// Reset a form's fields.
    fn reset_form(&mut self, id: &str) -> bool;
}

/// Element ids the storefront renders into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomIds {
    pub product_list: String,
    pub product_title: String,
    pub catalog_section: String,
    pub cart_items: String,
    pub cart_total: String,
    pub cart_empty: String,
    pub checkout_button: String,
    pub quote_form: String,
    pub quote_message: String,
    pub quote_section: String,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            product_list: "lista-productos".to_string(),
            product_title: "titulo-productos".to_string(),
            catalog_section: "catalogo".to_string(),
            cart_items: "carrito-items".to_string(),
            cart_total: "carrito-total".to_string(),
            cart_empty: "carrito-vacio".to_string(),
            checkout_button: "btn-pagar".to_string(),
            quote_form: "form-armar-pc".to_string(),
            quote_message: "mensaje-cotizacion".to_string(),
            quote_section: "arma-tu-pc".to_string(),
        }
    }
}
