//! Category product-list renderer.

use partes_commerce::catalog::{Catalog, Product};

use super::ADD_TO_CART_CLASS;
use crate::escape::escape_html;
use crate::messages;

/// Rendered product list for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    /// Text for the product-list title element.
    pub title: String,
    /// Markup for the product-list container.
    pub html: String,
    /// Number of product cards rendered; 0 means the placeholder was used.
    pub product_count: usize,
}

impl CategoryView {
    pub fn is_empty(&self) -> bool {
        self.product_count == 0
    }
}

/// Render the product list for a category.
pub fn render_category(catalog: &Catalog, category_id: &str) -> CategoryView {
    let title = match catalog.category_name(category_id) {
        Some(name) => messages::category_title(name),
        None => messages::FALLBACK_TITLE.to_string(),
    };

    let products = catalog.products_in(category_id);
    if products.is_empty() {
        return CategoryView {
            title,
            html: render_empty_category(),
            product_count: 0,
        };
    }

    let html: String = products.iter().map(|p| render_product_card(p)).collect();
    CategoryView {
        title,
        html,
        product_count: products.len(),
    }
}

/// Placeholder for a category without products.
pub fn render_empty_category() -> String {
    format!(r#"<p class="mensaje-vacio">{}</p>"#, messages::NO_PRODUCTS)
}

/// Render one product card.
pub fn render_product_card(product: &Product) -> String {
    let badge = product
        .badge
        .as_deref()
        .map(|b| format!(r#"<span class="producto-badge">{}</span>"#, escape_html(b)))
        .unwrap_or_default();

    let (stock_class, disabled) = if product.is_available() {
        ("disponible", "")
    } else {
        ("agotado", " disabled")
    };

    format!(
        r#"<article class="producto-card">
    {badge}
    <img src="{image}" alt="{name}" class="producto-imagen" loading="lazy" />
    <h3 class="producto-nombre">{name}</h3>
    <p class="producto-descripcion">{description}</p>
    {price}
    <p class="producto-stock {stock_class}">{stock_label}</p>
    <button class="btn btn-primary {button_class}" data-id="{id}"{disabled}>{button_label}</button>
</article>"#,
        badge = badge,
        image = escape_html(&product.image),
        name = escape_html(&product.name),
        description = escape_html(&product.description),
        price = render_price(product),
        stock_class = stock_class,
        stock_label = product.status.label(),
        button_class = ADD_TO_CART_CLASS,
        id = escape_html(product.id.as_str()),
        disabled = disabled,
        button_label = messages::ADD_TO_CART,
    )
}

/// Render the price block: struck-through original plus discount, or the
/// plain price.
pub fn render_price(product: &Product) -> String {
    match product.active_discount() {
        Some(discount) => format!(
            r#"<p class="producto-precio"><span class="precio-tachado">{}</span> <span class="precio-descuento">{}</span></p>"#,
            product.price.display(),
            discount.display()
        ),
        None => format!(
            r#"<p class="producto-precio">{}</p>"#,
            product.price.display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partes_commerce::catalog::{Category, ProductStatus};
    use partes_commerce::money::Money;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Product::new("gpu-1", "RX 7600", "gpu", Money::lempiras(7500.0))
                    .with_discount(Money::lempiras(6999.99))
                    .with_badge("Oferta"),
                Product::new("gpu-2", "RTX 4070", "gpu", Money::lempiras(15000.0))
                    .with_status(ProductStatus::SoldOut),
            ],
            vec![
                Category::new("gpu", "Tarjeta gráfica"),
                Category::new("psu", "Fuente de poder"),
            ],
        )
    }

    #[test]
    fn test_render_category_cards_in_order() {
        let view = render_category(&catalog(), "gpu");
        assert_eq!(view.title, "Opciones para Tarjeta gráfica");
        assert_eq!(view.product_count, 2);

        let first = view.html.find("RX 7600").unwrap();
        let second = view.html.find("RTX 4070").unwrap();
        assert!(first < second);
        assert_eq!(view.html.matches("<article").count(), 2);
    }

    #[test]
    fn test_render_known_category_without_products() {
        let view = render_category(&catalog(), "psu");
        assert_eq!(view.title, "Opciones para Fuente de poder");
        assert!(view.is_empty());
        assert_eq!(
            view.html,
            r#"<p class="mensaje-vacio">Aún no hay productos configurados para este componente.</p>"#
        );
    }

    #[test]
    fn test_render_unknown_category() {
        let view = render_category(&catalog(), "teclados");
        assert_eq!(view.title, "Opciones disponibles");
        assert!(view.is_empty());
    }

    #[test]
    fn test_price_block() {
        let products = catalog();
        assert_eq!(
            render_price(products.product("gpu-1").unwrap()),
            r#"<p class="producto-precio"><span class="precio-tachado">L 7500.00</span> <span class="precio-descuento">L 6999.99</span></p>"#
        );
        assert_eq!(
            render_price(products.product("gpu-2").unwrap()),
            r#"<p class="producto-precio">L 15000.00</p>"#
        );
    }

    #[test]
    fn test_card_availability() {
        let products = catalog();

        let available = render_product_card(products.product("gpu-1").unwrap());
        assert!(available.contains(r#"<span class="producto-badge">Oferta</span>"#));
        assert!(available.contains(r#"<p class="producto-stock disponible">Disponible</p>"#));
        assert!(available.contains(r#"data-id="gpu-1">Agregar al carrito</button>"#));

        let sold_out = render_product_card(products.product("gpu-2").unwrap());
        assert!(!sold_out.contains("producto-badge"));
        assert!(sold_out.contains(r#"<p class="producto-stock agotado">Agotado</p>"#));
        assert!(sold_out.contains(r#"data-id="gpu-2" disabled>"#));
    }

    #[test]
    fn test_card_escapes_product_text() {
        let mut product = Product::new("x\"1", "<script>", "gpu", Money::lempiras(1.0));
        product.description = "A & B".into();
        let html = render_product_card(&product);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("A &amp; B"));
        assert!(html.contains(r#"data-id="x&quot;1""#));
    }
}
