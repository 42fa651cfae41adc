//! Standalone search input with redirect-on-submit.

use std::rc::Rc;

use dioxus::prelude::*;
use lodestone_core::config::{merge_props, RedirectTarget, ResolvedConfig, WidgetParams};
use lodestone_core::error::ConfigError;

/// Results page Shopify storefronts serve regardless of configuration.
const SHOPIFY_SEARCH_PATH: &str = "/search";

/// A search box that sends the user to a results page on submit.
///
/// The destination comes from the caller's `redirect`; under the
/// `shopify` preset an unset URL falls back to the theme's `/search`
/// page. `on_submit` fires with the query text before the redirect so
/// hosts can intercept it (and is the only effect on native targets,
/// where there is no page to leave).
#[component]
pub fn SearchInput(
    widget_id: String,
    params: WidgetParams,
    on_submit: Option<EventHandler<String>>,
) -> Element {
    let resolved: Result<Rc<ResolvedConfig>, ConfigError> = use_hook({
        let params = params.clone();
        let widget_id = widget_id.clone();
        move || merge_props(&params, &widget_id).map(Rc::new)
    });
    let config = match resolved {
        Ok(config) => config,
        Err(err) => {
            return rsx! {
                div { class: "ls-widget ls-widget--error", "Search widget configuration error: {err}" }
            };
        }
    };

    let redirect = effective_redirect(&params);
    let mut query = use_signal(String::new);

    let submit = use_callback(move |_: ()| {
        let text = query.peek().clone();
        if text.trim().is_empty() {
            return;
        }
        if let Some(handler) = on_submit {
            handler.call(text.clone());
        }
        #[cfg(target_arch = "wasm32")]
        if !redirect.url.is_empty() {
            crate::dom::redirect_with_query(&redirect.url, redirect.param_name(), &text);
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = &redirect;
    });

    let placeholder = config
        .options
        .input
        .placeholder
        .clone()
        .unwrap_or_else(|| "Search".to_string());

    rsx! {
        div { id: "{widget_id}", class: "ls-widget ls-search-input",
            input {
                class: "ls-input",
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
                onkeypress: move |evt| {
                    if evt.key() == Key::Enter {
                        submit.call(());
                    }
                },
            }
            button { class: "ls-btn ls-btn--primary", onclick: move |_| submit.call(()), "Search" }
        }
    }
}

/// The submit destination, with the preset fallback applied.
pub(crate) fn effective_redirect(params: &WidgetParams) -> RedirectTarget {
    let mut redirect = params.redirect.clone().unwrap_or_default();
    if redirect.url.is_empty() && params.preset.as_deref() == Some("shopify") {
        redirect.url = SHOPIFY_SEARCH_PATH.to_string();
    }
    redirect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shopify_preset_defaults_the_redirect_to_the_theme_search_page() {
        let params = WidgetParams {
            preset: Some("shopify".into()),
            ..WidgetParams::default()
        };
        let redirect = effective_redirect(&params);
        assert_eq!(redirect.url, "/search");
        assert_eq!(redirect.param_name(), "q");
    }

    #[test]
    fn caller_redirects_win_over_the_preset_fallback() {
        let params = WidgetParams {
            preset: Some("shopify".into()),
            redirect: Some(RedirectTarget {
                url: "/find".into(),
                query_param_name: Some("term".into()),
            }),
            ..WidgetParams::default()
        };
        let redirect = effective_redirect(&params);
        assert_eq!(redirect.url, "/find");
        assert_eq!(redirect.param_name(), "term");
    }

    #[test]
    fn without_preset_or_redirect_there_is_no_destination() {
        let redirect = effective_redirect(&WidgetParams::default());
        assert!(redirect.url.is_empty());
    }
}
