//! Host-page DOM plumbing (wasm32 only).
//!
//! The binding and overlay widgets reach into the page they are
//! embedded in: adopting theme inputs, removing theme elements, and
//! listening on theme triggers. Everything DOM-flavored funnels through
//! here so the widgets stay declarative.

use dioxus::logger::tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement};

use lodestone_core::config::Selectors;
use lodestone_core::sync::query_string;

/// Theme attributes scrubbed off adopted inputs so the storefront's
/// own predictive search stops fighting the widget for them.
pub const SCRUBBED_INPUT_ATTRIBUTES: &[&str] = &[
    "data-predictive-search-drawer-input",
    "role",
    "aria-autocomplete",
    "aria-owns",
    "aria-expanded",
    "aria-label",
    "aria-haspopup",
];

pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

/// All elements matching `selector`, empty on a malformed selector.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Ok(list) = document.query_selector_all(selector) else {
        warn!(selector = %selector, "selector did not parse");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// The input elements a binding widget should adopt: matches that are
/// inputs themselves plus input children of matched containers.
pub fn query_inputs(selector: &str) -> Vec<HtmlInputElement> {
    let mut inputs = Vec::new();
    for element in query_all(selector) {
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => inputs.push(input),
            Err(container) => {
                let children = container.children();
                for index in 0..children.length() {
                    if let Some(input) = children
                        .item(index)
                        .and_then(|child| child.dyn_into::<HtmlInputElement>().ok())
                    {
                        inputs.push(input);
                    }
                }
            }
        }
    }
    inputs
}

/// Removes every element matched by any of the selectors.
pub fn remove_elements(selectors: &Selectors) {
    for selector in selectors.iter() {
        for element in query_all(selector) {
            element.remove();
        }
    }
}

pub fn scrub_input_attributes(element: &Element) {
    for attribute in SCRUBBED_INPUT_ATTRIBUTES {
        let _ = element.remove_attribute(attribute);
    }
}

/// Points the input's enclosing form at the results page: the input
/// submits under `param_name` and the form GETs `action`. Returns the
/// form when one encloses the input.
pub fn rewrite_search_form(
    input: &HtmlInputElement,
    action: &str,
    param_name: &str,
) -> Option<HtmlFormElement> {
    let form = input
        .closest("form")
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())?;
    let _ = input.set_attribute("name", param_name);
    let _ = form.set_attribute("action", action);
    let _ = form.set_attribute("method", "get");
    Some(form)
}

/// Leaves the page for `pathname` carrying `query` under `param_name`.
/// Used when no form encloses the bound input.
pub fn redirect_with_query(pathname: &str, param_name: &str, query: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(href) = window.location().href() else {
        return;
    };
    let Ok(url) = web_sys::Url::new(&href) else {
        return;
    };
    let search = query_string::with_param(&url.search(), param_name, Some(query));
    url.set_pathname(pathname);
    url.set_search(&search);
    debug!(href = %url.href(), "redirecting to results page");
    if window.location().set_href(&url.href()).is_err() {
        warn!("redirect was rejected by the browser");
    }
}

/// An event listener tied to a DOM element for the guard's lifetime.
///
/// Dropping the guard removes the listener, giving widgets the same
/// RAII teardown the core's `Subscription` gives bindings.
pub struct ListenerGuard {
    target: web_sys::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl ListenerGuard {
    pub fn attach(
        target: &web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        if target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .is_err()
        {
            warn!(event = %event, "listener could not be installed");
            return None;
        }
        Some(ListenerGuard {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Attaches to the window, if one exists.
    pub fn on_window(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        Self::attach(window.as_ref(), event, handler)
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// The window's current layout width in CSS pixels.
pub fn viewport_width() -> u32 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width.max(0.0) as u32)
        .unwrap_or(0)
}
