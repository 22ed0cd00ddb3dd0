//! Customer-facing copy.

/// Product-list title for a known category.
pub fn category_title(name: &str) -> String {
    format!("Opciones para {name}")
}

/// Product-list title when the category is not in the page data.
pub const FALLBACK_TITLE: &str = "Opciones disponibles";

/// Placeholder shown for a category without products.
pub const NO_PRODUCTS: &str = "Aún no hay productos configurados para este componente.";

pub const ADD_TO_CART: &str = "Agregar al carrito";
pub const REMOVE: &str = "Quitar";

pub const EMPTY_CART_WARNING: &str = "Tu carrito está vacío. Agrega productos antes de pagar.";
pub const CHECKOUT_SUCCESS: &str = "Pago exitoso. ¡Gracias por tu compra! (Simulación)";
pub const QUOTE_SENT: &str = "Tu solicitud de cotización fue enviada. Nos pondremos en contacto contigo de forma personal y privada.";
