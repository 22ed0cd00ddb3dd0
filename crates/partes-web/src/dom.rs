//! `web-sys` implementation of the storefront DOM contract.

use partes_view::{ClickTarget, Dom};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, ScrollBehavior, ScrollIntoViewOptions};

/// The live document.
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

impl Dom for WebDom {
    fn has_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn set_inner_html(&mut self, id: &str, html: &str) -> bool {
        match self.element(id) {
            Some(el) => {
                el.set_inner_html(html);
                true
            }
            None => false,
        }
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        match self.element(id) {
            Some(el) => {
                el.set_text_content(Some(text));
                true
            }
            None => false,
        }
    }

    fn set_visible(&mut self, id: &str, visible: bool) -> bool {
        let Some(el) = self.element(id).and_then(|e| e.dyn_into::<HtmlElement>().ok()) else {
            return false;
        };
        let display = if visible { "block" } else { "none" };
        el.style().set_property("display", display).is_ok()
    }

    fn scroll_into_view(&mut self, id: &str) -> bool {
        match self.element(id) {
            Some(el) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }

    fn reset_form(&mut self, id: &str) -> bool {
        match self
            .element(id)
            .and_then(|e| e.dyn_into::<HtmlFormElement>().ok())
        {
            Some(form) => {
                form.reset();
                true
            }
            None => false,
        }
    }
}

/// Click target backed by the event's target element.
pub struct ElementTarget(pub Element);

impl ClickTarget for ElementTarget {
    fn closest_attribute(&self, selector: &str, attribute: &str) -> Option<String> {
        self.0
            .closest(selector)
            .ok()
            .flatten()
            .and_then(|el| el.get_attribute(attribute))
    }

    fn is_within(&self, element_id: &str) -> bool {
        let mut current = Some(self.0.clone());
        while let Some(el) = current {
            if el.id() == element_id {
                return true;
            }
            current = el.parent_element();
        }
        false
    }
}
