//! Storefront composition root.

use partes_commerce::cart::{AddOutcome, CartStore};
use partes_commerce::catalog::Catalog;
use partes_commerce::checkout::{self, CheckoutOutcome};

use crate::dom::{Dom, DomIds};
use crate::events::StoreEvent;
use crate::messages;
use crate::notify::{Notice, Notifier};
use crate::sections::{render_cart, render_category, CartView, CategoryView};

/// What handling an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// A category was rendered, or `None` if its containers are missing.
    CategoryShown(Option<CategoryView>),
    Added(AddOutcome),
    Removed(bool),
    Checkout(CheckoutOutcome),
    QuoteSent(QuoteDelivery),
}

/// Where the quote confirmation was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteDelivery {
    /// In the page's message element.
    Inline,
    /// Through the notifier because the message element is missing.
    Notice,
}

/// Owns the catalog, the cart and the page, and applies shopper events.
///
/// All rendering goes through [`Dom`] and every render is idempotent: it
/// replaces container contents wholesale from current state.
pub struct Storefront<D, N> {
    catalog: Catalog,
    cart: CartStore,
    dom: D,
    notifier: N,
    ids: DomIds,
}

impl<D: Dom, N: Notifier> Storefront<D, N> {
    /// Create a storefront with an empty cart and the default element ids.
    pub fn new(catalog: Catalog, dom: D, notifier: N) -> Self {
        Self {
            catalog,
            cart: CartStore::new(),
            dom,
            notifier,
            ids: DomIds::default(),
        }
    }

    /// Use custom element ids.
    pub fn with_ids(mut self, ids: DomIds) -> Self {
        self.ids = ids;
        self
    }

    /// Initial render on page load.
    pub fn start(&mut self) {
        self.render_cart();
    }

    /// Apply a shopper event.
    pub fn handle(&mut self, event: StoreEvent) -> EventOutcome {
        tracing::debug!(?event, "handling event");
        match event {
            StoreEvent::SelectCategory(id) => {
                EventOutcome::CategoryShown(self.render_category(id.as_str()))
            }
            StoreEvent::AddToCart(id) => EventOutcome::Added(self.add_to_cart(id.as_str())),
            StoreEvent::RemoveFromCart(id) => {
                EventOutcome::Removed(self.remove_from_cart(id.as_str()))
            }
            StoreEvent::Checkout => EventOutcome::Checkout(self.checkout()),
            StoreEvent::SubmitQuote => EventOutcome::QuoteSent(self.submit_quote()),
        }
    }

    /// Render a category's products into the product list.
    ///
    /// No-op when the product list or its title element is missing.
    pub fn render_category(&mut self, category_id: &str) -> Option<CategoryView> {
        if !self.dom.has_element(&self.ids.product_list)
            || !self.dom.has_element(&self.ids.product_title)
        {
            tracing::debug!(category_id, "product list containers missing");
            return None;
        }

        let view = render_category(&self.catalog, category_id);
        self.dom.set_text(&self.ids.product_title, &view.title);
        self.dom.set_inner_html(&self.ids.product_list, &view.html);
        if !view.is_empty() {
            self.dom.scroll_into_view(&self.ids.catalog_section);
        }
        Some(view)
    }

    /// Render the cart rows, total and empty-state message.
    ///
    /// No-op when any of the three cart elements is missing.
    pub fn render_cart(&mut self) -> Option<CartView> {
        let ids = &self.ids;
        if !self.dom.has_element(&ids.cart_items)
            || !self.dom.has_element(&ids.cart_total)
            || !self.dom.has_element(&ids.cart_empty)
        {
            tracing::debug!("cart containers missing");
            return None;
        }

        let summary = self.cart.summarize(&self.catalog);
        if summary.orphaned > 0 {
            tracing::debug!(orphaned = summary.orphaned, "skipped cart entries without product");
        }
        let view = render_cart(&summary, self.cart.is_empty());

        self.dom.set_inner_html(&ids.cart_items, &view.items_html);
        self.dom.set_visible(&ids.cart_empty, view.show_empty_message);
        self.dom.set_text(&ids.cart_total, &view.total_text);
        Some(view)
    }

    /// Add one unit of a product and redraw the cart.
    pub fn add_to_cart(&mut self, product_id: &str) -> AddOutcome {
        let outcome = self.cart.add(&self.catalog, product_id);
        if outcome.is_accepted() {
            self.render_cart();
        }
        outcome
    }

    /// Remove a product from the cart and redraw it.
    pub fn remove_from_cart(&mut self, product_id: &str) -> bool {
        let removed = self.cart.remove(product_id);
        self.render_cart();
        removed
    }

    /// Simulate payment.
    ///
    /// Warns on an empty cart; otherwise acknowledges, clears and redraws.
    pub fn checkout(&mut self) -> CheckoutOutcome {
        let outcome = checkout::checkout(&mut self.cart, &self.catalog);
        match outcome {
            CheckoutOutcome::EmptyCart => {
                self.notifier.notify(Notice::warning(messages::EMPTY_CART_WARNING));
            }
            CheckoutOutcome::Completed { .. } => {
                self.notifier.notify(Notice::success(messages::CHECKOUT_SUCCESS));
                self.render_cart();
            }
        }
        outcome
    }

    /// Simulate sending the quote-request form.
    ///
    /// The caller is responsible for preventing the browser's default
    /// submission.
    pub fn submit_quote(&mut self) -> QuoteDelivery {
        self.dom.reset_form(&self.ids.quote_form);

        let delivery = if self.dom.has_element(&self.ids.quote_message) {
            self.dom.set_text(&self.ids.quote_message, messages::QUOTE_SENT);
            self.dom.set_visible(&self.ids.quote_message, true);
            QuoteDelivery::Inline
        } else {
            self.notifier.notify(Notice::success(messages::QUOTE_SENT));
            QuoteDelivery::Notice
        };

        self.dom.scroll_into_view(&self.ids.quote_section);
        tracing::info!(?delivery, "quote request simulated");
        delivery
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn ids(&self) -> &DomIds {
        &self.ids
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{NoticeKind, NoticeLog};
    use crate::testing::MemoryDom;
    use partes_commerce::prelude::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Product::new("A", "Fuente 650W", "psu", Money::lempiras(100.0))
                    .with_discount(Money::lempiras(80.0)),
                Product::new("B", "RTX 4090", "gpu", Money::lempiras(50000.0))
                    .with_status(ProductStatus::SoldOut),
            ],
            vec![
                Category::new("psu", "Fuente de poder"),
                Category::new("ram", "Memoria RAM"),
            ],
        )
    }

    fn storefront() -> Storefront<MemoryDom, NoticeLog> {
        let mut store = Storefront::new(
            catalog(),
            MemoryDom::full(&DomIds::default()),
            NoticeLog::new(),
        );
        store.start();
        store
    }

    fn empty_visible(store: &Storefront<MemoryDom, NoticeLog>) -> Option<bool> {
        store.dom().get("carrito-vacio").and_then(|e| e.visible)
    }

    #[test]
    fn test_start_renders_empty_cart() {
        let store = storefront();
        assert_eq!(store.dom().text("carrito-total"), "L 0.00");
        assert_eq!(store.dom().html("carrito-items"), "");
        assert_eq!(empty_visible(&store), Some(true));
    }

    #[test]
    fn test_add_renders_cart() {
        let mut store = storefront();
        store.handle(StoreEvent::AddToCart("A".into()));
        store.handle(StoreEvent::AddToCart("A".into()));

        assert_eq!(store.cart().len(), 1);
        assert_eq!(store.dom().text("carrito-total"), "L 160.00");
        assert!(store.dom().html("carrito-items").contains("Cantidad: 2"));
        assert_eq!(empty_visible(&store), Some(false));
    }

    #[test]
    fn test_sold_out_add_is_ignored() {
        let mut store = storefront();
        let outcome = store.handle(StoreEvent::AddToCart("B".into()));
        assert_eq!(
            outcome,
            EventOutcome::Added(AddOutcome::Rejected(RejectReason::SoldOut))
        );
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_remove_rerenders_to_empty() {
        let mut store = storefront();
        store.add_to_cart("A");
        assert!(store.remove_from_cart("A"));
        assert!(!store.remove_from_cart("A"));

        assert_eq!(store.dom().text("carrito-total"), "L 0.00");
        assert_eq!(empty_visible(&store), Some(true));
    }

    #[test]
    fn test_checkout_empty_cart_warns() {
        let mut store = storefront();
        assert_eq!(store.checkout(), CheckoutOutcome::EmptyCart);

        let notice = store.notifier().last().unwrap();
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert_eq!(notice.message, messages::EMPTY_CART_WARNING);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_checkout_clears_and_rerenders() {
        let mut store = storefront();
        store.add_to_cart("A");

        assert!(store.checkout().is_completed());
        assert_eq!(store.notifier().notices().len(), 1);
        assert_eq!(store.notifier().notices()[0].kind, NoticeKind::Success);
        assert!(store.cart().is_empty());
        assert_eq!(store.dom().text("carrito-total"), "L 0.00");
        assert_eq!(empty_visible(&store), Some(true));
    }

    #[test]
    fn test_select_category_renders_and_scrolls() {
        let mut store = storefront();
        store.handle(StoreEvent::SelectCategory("psu".into()));

        assert_eq!(store.dom().text("titulo-productos"), "Opciones para Fuente de poder");
        assert!(store.dom().html("lista-productos").contains("Fuente 650W"));
        assert_eq!(store.dom().get("catalogo").unwrap().scrolls, 1);
    }

    #[test]
    fn test_select_empty_category_shows_placeholder() {
        let mut store = storefront();
        let view = store.render_category("ram").unwrap();

        assert!(view.is_empty());
        assert_eq!(store.dom().text("titulo-productos"), "Opciones para Memoria RAM");
        assert!(store.dom().html("lista-productos").contains("mensaje-vacio"));
        assert_eq!(store.dom().get("catalogo").unwrap().scrolls, 0);
    }

    #[test]
    fn test_render_category_without_containers_is_noop() {
        let dom = MemoryDom::full(&DomIds::default()).without("titulo-productos");
        let mut store = Storefront::new(catalog(), dom, NoticeLog::new());

        assert_eq!(store.render_category("psu"), None);
        assert_eq!(store.dom().html("lista-productos"), "");
    }

    #[test]
    fn test_cart_without_containers_still_mutates() {
        let dom = MemoryDom::full(&DomIds::default()).without("carrito-vacio");
        let mut store = Storefront::new(catalog(), dom, NoticeLog::new());
        store.start();

        store.add_to_cart("A");
        assert_eq!(store.cart().quantity_of("A"), 1);
        assert_eq!(store.render_cart(), None);
        assert_eq!(store.dom().text("carrito-total"), "");
    }

    #[test]
    fn test_quote_inline_message() {
        let mut store = storefront();
        assert_eq!(store.submit_quote(), QuoteDelivery::Inline);

        let message = store.dom().get("mensaje-cotizacion").unwrap();
        assert_eq!(message.text, messages::QUOTE_SENT);
        assert_eq!(message.visible, Some(true));
        assert_eq!(store.dom().get("form-armar-pc").unwrap().resets, 1);
        assert_eq!(store.dom().get("arma-tu-pc").unwrap().scrolls, 1);
        assert!(store.notifier().notices().is_empty());
    }

    #[test]
    fn test_quote_falls_back_to_notice() {
        let dom = MemoryDom::full(&DomIds::default()).without("mensaje-cotizacion");
        let mut store = Storefront::new(catalog(), dom, NoticeLog::new());

        assert_eq!(
            store.handle(StoreEvent::SubmitQuote),
            EventOutcome::QuoteSent(QuoteDelivery::Notice)
        );
        assert_eq!(store.notifier().last().unwrap().message, messages::QUOTE_SENT);
    }

    #[test]
    fn test_custom_ids() {
        let ids = DomIds {
            cart_total: "total".to_string(),
            ..DomIds::default()
        };
        let mut store =
            Storefront::new(catalog(), MemoryDom::full(&ids), NoticeLog::new()).with_ids(ids);
        store.add_to_cart("A");
        assert_eq!(store.dom().text("total"), "L 80.00");
    }
}
