//! In-memory DOM for tests.

use std::collections::HashMap;

use crate::dom::{Dom, DomIds};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub html: String,
    pub text: String,
    pub visible: Option<bool>,
    pub scrolls: usize,
    pub resets: usize,
}

#[derive(Debug, Default)]
pub struct MemoryDom {
    elements: HashMap<String, Element>,
}

impl MemoryDom {
    /// A page containing every element of `ids`.
    pub fn full(ids: &DomIds) -> Self {
        let mut dom = Self::default();
        for id in [
            &ids.product_list,
            &ids.product_title,
            &ids.catalog_section,
            &ids.cart_items,
            &ids.cart_total,
            &ids.cart_empty,
            &ids.checkout_button,
            &ids.quote_form,
            &ids.quote_message,
            &ids.quote_section,
        ] {
            dom.elements.insert(id.clone(), Element::default());
        }
        dom
    }

    pub fn without(mut self, id: &str) -> Self {
        self.elements.remove(id);
        self
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn html(&self, id: &str) -> &str {
        self.get(id).map(|e| e.html.as_str()).unwrap_or_default()
    }

    pub fn text(&self, id: &str) -> &str {
        self.get(id).map(|e| e.text.as_str()).unwrap_or_default()
    }

    fn with_element(&mut self, id: &str, f: impl FnOnce(&mut Element)) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                f(element);
                true
            }
            None => false,
        }
    }
}

impl Dom for MemoryDom {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn set_inner_html(&mut self, id: &str, html: &str) -> bool {
        self.with_element(id, |e| e.html = html.to_string())
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        self.with_element(id, |e| e.text = text.to_string())
    }

    fn set_visible(&mut self, id: &str, visible: bool) -> bool {
        self.with_element(id, |e| e.visible = Some(visible))
    }

    fn scroll_into_view(&mut self, id: &str) -> bool {
        self.with_element(id, |e| e.scrolls += 1)
    }

    fn reset_form(&mut self, id: &str) -> bool {
        self.with_element(id, |e| e.resets += 1)
    }
}
