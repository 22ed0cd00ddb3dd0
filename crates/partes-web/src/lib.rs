//! Browser entry point for the Partes PC storefront.
//!
//! Loads the embedded page data, builds the [`Storefront`], and wires
//! delegated listeners: one click listener on `<body>` and one submit
//! listener on the quote form. Re-renders never touch the listeners.

mod data;
mod dom;
mod logging;
mod notify;

use std::cell::RefCell;
use std::rc::Rc;

use partes_view::{resolve_click, DomIds, StoreEvent, Storefront};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

pub use data::{load_catalog, parse_config, provider};
pub use dom::{ElementTarget, WebDom};
pub use notify::AlertNotifier;

type WebStorefront = Storefront<WebDom, AlertNotifier>;

/// Module start: runs once the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logging::init();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let config = parse_config(
        document
            .body()
            .and_then(|b| b.get_attribute("data-storefront"))
            .as_deref(),
    );
    let catalog = load_catalog(&config.page).map_err(|e| JsValue::from_str(&e.to_string()))?;
    tracing::info!(page = %config.page, products = catalog.products().len(), "storefront starting");

    let ids = config.ids.clone();
    let store = Rc::new(RefCell::new(
        Storefront::new(catalog, WebDom::new(document.clone()), AlertNotifier::new(window))
            .with_ids(config.ids),
    ));

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once(move |_: Event| {
            if let Err(e) = mount(&store, &doc, &ids) {
                tracing::error!(error = ?e, "storefront mount failed");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
        Ok(())
    } else {
        mount(&store, &document, &ids)
    }
}

/// Attach the delegated listeners and render the initial cart.
fn mount(store: &Rc<RefCell<WebStorefront>>, document: &Document, ids: &DomIds) -> Result<(), JsValue> {
    store.borrow_mut().start();

    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
    let click_store = Rc::clone(store);
    let click_ids = ids.clone();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if let Some(store_event) = resolve_click(&ElementTarget(target), &click_ids) {
            click_store.borrow_mut().handle(store_event);
        }
    });
    body.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    if let Some(form) = document.get_element_by_id(&ids.quote_form) {
        let submit_store = Rc::clone(store);
        let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            submit_store.borrow_mut().handle(StoreEvent::SubmitQuote);
        });
        form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
        on_submit.forget();
    }

    tracing::debug!("storefront mounted");
    Ok(())
}
