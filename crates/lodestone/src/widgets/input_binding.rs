//! Binds search behavior onto the host page's own inputs.

use std::rc::Rc;

use dioxus::prelude::*;
use lodestone_core::config::{merge_props, Preset, ResolvedConfig, WidgetParams};
use lodestone_core::context::{build_search_context, SearchContext};
use lodestone_core::error::ConfigError;

/// Adopts existing input elements instead of rendering one.
///
/// Targets come from the caller's `selector`, falling back to the
/// preset's storefront selector (Shopify: the theme's native search
/// form input). Each adopted input is scrubbed of the theme's
/// predictive-search attributes, its enclosing form is pointed at the
/// results page, and Enter submits: through the form when one exists,
/// by rewriting the location otherwise. `omittedElementSelectors`
/// remove competing theme UI outright.
///
/// The widget renders nothing itself; the resolved [`SearchContext`]
/// is provided as context for a co-mounted transport.
#[component]
pub fn InputBinding(params: WidgetParams, on_select: Option<EventHandler<String>>) -> Element {
    let resolved: Result<(Rc<ResolvedConfig>, Rc<SearchContext>), ConfigError> = use_hook({
        let params = params.clone();
        move || {
            let config = merge_props(&params, "search-input-binding")?;
            let context =
                build_search_context(&params, config.fields.clone(), config.tracking.clone());
            Ok((Rc::new(config), Rc::new(context)))
        }
    });
    let (_config, search_context) = match resolved {
        Ok(pair) => pair,
        Err(err) => {
            return rsx! {
                div { class: "ls-widget ls-widget--error", "Search widget configuration error: {err}" }
            };
        }
    };
    use_context_provider(|| search_context);

    // Attachment happens once per mount; the guards keep the DOM
    // listeners alive until unmount.
    #[cfg(target_arch = "wasm32")]
    use_hook({
        let params = params.clone();
        move || Rc::new(wasm::attach(&params, on_select))
    });
    #[cfg(not(target_arch = "wasm32"))]
    let _ = on_select;

    rsx! {}
}

/// The selector naming the inputs to adopt: the caller's, or the
/// preset's storefront default.
pub fn binding_selector(params: &WidgetParams) -> Option<String> {
    if let Some(selector) = &params.selector {
        return Some(selector.clone());
    }
    params
        .preset
        .as_deref()
        .and_then(Preset::parse)
        .and_then(|preset| preset.input_selector())
        .map(str::to_string)
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use dioxus::logger::tracing::warn;
    use dioxus::prelude::EventHandler;
    use wasm_bindgen::JsCast;

    use super::*;
    use crate::dom;
    use crate::widgets::search_input::effective_redirect;

    pub fn attach(
        params: &WidgetParams,
        on_select: Option<EventHandler<String>>,
    ) -> Vec<dom::ListenerGuard> {
        let Some(selector) = binding_selector(params) else {
            warn!("input binding has no selector and no preset default, nothing to adopt");
            return Vec::new();
        };
        if let Some(omitted) = &params.omitted_element_selectors {
            dom::remove_elements(omitted);
        }

        let redirect = effective_redirect(params);
        let inputs = dom::query_inputs(&selector);
        if inputs.is_empty() {
            warn!(selector = %selector, "input binding matched no inputs");
            return Vec::new();
        }

        let mut guards = Vec::new();
        for input in inputs {
            dom::scrub_input_attributes(&input);
            let form = dom::rewrite_search_form(&input, &redirect.url, redirect.param_name());
            let handler = {
                let input = input.clone();
                let redirect = redirect.clone();
                move |event: web_sys::Event| {
                    let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                        return;
                    };
                    if key_event.key() != "Enter" {
                        return;
                    }
                    let value = input.value();
                    if value.trim().is_empty() {
                        return;
                    }
                    if let Some(handler) = on_select {
                        handler.call(value.clone());
                    }
                    match &form {
                        Some(form) => {
                            event.prevent_default();
                            form.submit().unwrap_or_else(|err| {
                                warn!("form submit rejected: {err:?}");
                            });
                        }
                        None => dom::redirect_with_query(
                            &redirect.url,
                            redirect.param_name(),
                            &value,
                        ),
                    }
                }
            };
            if let Some(guard) = dom::ListenerGuard::attach(input.as_ref(), "keydown", handler) {
                guards.push(guard);
            }
        }
        guards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_selectors_win_over_preset_defaults() {
        let params = WidgetParams {
            selector: Some("#site-search".into()),
            preset: Some("shopify".into()),
            ..WidgetParams::default()
        };
        assert_eq!(binding_selector(&params).as_deref(), Some("#site-search"));
    }

    #[test]
    fn shopify_preset_supplies_the_theme_input_selector() {
        let params = WidgetParams {
            preset: Some("shopify".into()),
            ..WidgetParams::default()
        };
        assert_eq!(
            binding_selector(&params).as_deref(),
            Some(r#"form[action="/search"] input[name="q"]"#)
        );
    }

    #[test]
    fn other_presets_have_no_default_selector() {
        let params = WidgetParams {
            preset: Some("website".into()),
            ..WidgetParams::default()
        };
        assert_eq!(binding_selector(&params), None);
        assert_eq!(binding_selector(&WidgetParams::default()), None);
    }
}
