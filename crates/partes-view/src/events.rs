//! Storefront events and click delegation.
//!
//! One listener on a stable ancestor receives every click; the hook
//! attributes on the clicked element (or its ancestors) decide which event
//! fires. Re-rendered markup therefore needs no new listeners.

use partes_commerce::ids::{CategoryId, ProductId};

use crate::dom::DomIds;
use crate::sections::{ADD_TO_CART_CLASS, REMOVE_CLASS};

/// A shopper interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    SelectCategory(CategoryId),
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
    Checkout,
    SubmitQuote,
}

/// The element a click landed on.
pub trait ClickTarget {
    /// Value of `attribute` on the closest element matching `selector`,
    /// starting from the target itself.
    fn closest_attribute(&self, selector: &str, attribute: &str) -> Option<String>;

    /// Whether the target is, or is inside, the element with this id.
    fn is_within(&self, element_id: &str) -> bool;
}

/// Map a click to the event of the nearest hook.
///
/// Cart removal wins over add-to-cart, which wins over category selection;
/// the checkout button is checked last.
pub fn resolve_click(target: &impl ClickTarget, ids: &DomIds) -> Option<StoreEvent> {
    if let Some(id) = target.closest_attribute(&format!(".{REMOVE_CLASS}[data-id]"), "data-id") {
        return Some(StoreEvent::RemoveFromCart(ProductId::new(id)));
    }
    if let Some(id) = target.closest_attribute(&format!(".{ADD_TO_CART_CLASS}[data-id]"), "data-id")
    {
        return Some(StoreEvent::AddToCart(ProductId::new(id)));
    }
    if let Some(category) = target.closest_attribute("[data-category]", "data-category") {
        return Some(StoreEvent::SelectCategory(CategoryId::new(category)));
    }
    if target.is_within(&ids.checkout_button) {
        return Some(StoreEvent::Checkout);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Target described by the hooks found on its ancestor chain.
    #[derive(Default)]
    struct FakeTarget {
        hooks: HashMap<&'static str, &'static str>,
        within: Vec<&'static str>,
    }

    impl FakeTarget {
        fn hook(mut self, selector: &'static str, value: &'static str) -> Self {
            self.hooks.insert(selector, value);
            self
        }

        fn inside(mut self, id: &'static str) -> Self {
            self.within.push(id);
            self
        }
    }

    impl ClickTarget for FakeTarget {
        fn closest_attribute(&self, selector: &str, _attribute: &str) -> Option<String> {
            self.hooks.get(selector).map(|v| v.to_string())
        }

        fn is_within(&self, element_id: &str) -> bool {
            self.within.iter().any(|id| *id == element_id)
        }
    }

    #[test]
    fn test_resolves_each_hook() {
        let ids = DomIds::default();

        let add = FakeTarget::default().hook(".btn-agregar-carrito[data-id]", "cpu-1");
        assert_eq!(
            resolve_click(&add, &ids),
            Some(StoreEvent::AddToCart(ProductId::new("cpu-1")))
        );

        let remove = FakeTarget::default().hook(".btn-eliminar[data-id]", "cpu-1");
        assert_eq!(
            resolve_click(&remove, &ids),
            Some(StoreEvent::RemoveFromCart(ProductId::new("cpu-1")))
        );

        let category = FakeTarget::default().hook("[data-category]", "gpu");
        assert_eq!(
            resolve_click(&category, &ids),
            Some(StoreEvent::SelectCategory(CategoryId::new("gpu")))
        );

        let pay = FakeTarget::default().inside("btn-pagar");
        assert_eq!(resolve_click(&pay, &ids), Some(StoreEvent::Checkout));
    }

    #[test]
    fn test_nearest_specific_hook_wins() {
        let ids = DomIds::default();
        // An add button inside a card that sits in a [data-category] section.
        let target = FakeTarget::default()
            .hook(".btn-agregar-carrito[data-id]", "gpu-2")
            .hook("[data-category]", "gpu");
        assert_eq!(
            resolve_click(&target, &ids),
            Some(StoreEvent::AddToCart(ProductId::new("gpu-2")))
        );
    }

    #[test]
    fn test_unhooked_click() {
        let target = FakeTarget::default().inside("catalogo");
        assert_eq!(resolve_click(&target, &DomIds::default()), None);
    }
}
