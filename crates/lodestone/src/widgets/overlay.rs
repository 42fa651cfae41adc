//! Modal search results opened from host-page triggers.

use std::rc::Rc;

use dioxus::prelude::*;
use lodestone_core::config::{
    merge_props, Preset, ResolvedConfig, Selectors, WidgetParams,
};
use lodestone_core::error::ConfigError;

use crate::widgets::{SearchRequest, SearchResults};

/// A results page inside a modal.
///
/// Trigger elements on the host page (the configured `buttonSelector`,
/// or the preset's storefront triggers) open the modal; Escape, the
/// close button, and the backdrop close it. `defaultOpen` shows the
/// modal as soon as the widget mounts. The embedded results page never
/// synchronizes to the URL: closing the modal must not leave history
/// entries behind.
#[component]
pub fn Overlay(
    widget_id: String,
    params: WidgetParams,
    on_search: Option<EventHandler<SearchRequest>>,
) -> Element {
    let resolved: Result<Rc<ResolvedConfig>, ConfigError> = use_hook({
        let params = params.clone();
        let widget_id = widget_id.clone();
        move || merge_props(&overlay_params(&params), &widget_id).map(Rc::new)
    });
    let config = match resolved {
        Ok(config) => config,
        Err(err) => {
            return rsx! {
                div { class: "ls-widget ls-widget--error", "Search widget configuration error: {err}" }
            };
        }
    };

    let mut open = use_signal(|| config.options.default_open);

    #[cfg(target_arch = "wasm32")]
    use_hook({
        let preset = params.preset.as_deref().and_then(Preset::parse);
        let selectors = trigger_selectors(preset, config.options.button_selector.as_ref());
        move || {
            let guards: Vec<_> = selectors
                .iter()
                .flat_map(|selector| crate::dom::query_all(selector))
                .filter_map(|element| {
                    crate::dom::ListenerGuard::attach(element.as_ref(), "click", move |event| {
                        event.prevent_default();
                        open.set(true);
                    })
                })
                .collect();
            Rc::new(guards)
        }
    });

    let aria_label = config
        .options
        .aria_label
        .clone()
        .unwrap_or_else(|| "Search".to_string());
    let overlay_id = widget_id.clone();

    rsx! {
        if open() {
            div {
                class: "ls-overlay",
                role: "dialog",
                aria_modal: "true",
                aria_label: "{aria_label}",
                tabindex: "-1",
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        open.set(false);
                    }
                },
                div { class: "ls-overlay-backdrop", onclick: move |_| open.set(false) }
                div { class: "ls-overlay-panel",
                    button {
                        class: "ls-btn ls-overlay-close",
                        aria_label: "Close search",
                        onclick: move |_| open.set(false),
                        "\u{00d7}"
                    }
                    SearchResults {
                        widget_id: "{overlay_id}-results",
                        params: params.clone(),
                        on_search,
                    }
                }
            }
        }
    }
}

/// The host-page elements whose activation opens the modal.
fn trigger_selectors(preset: Option<Preset>, configured: Option<&Selectors>) -> Vec<String> {
    match configured {
        Some(selectors) => selectors.iter().map(str::to_string).collect(),
        None => preset
            .map(|preset| {
                preset
                    .overlay_trigger_selectors()
                    .iter()
                    .map(|selector| selector.to_string())
                    .collect()
            })
            .unwrap_or_default(),
    }
}

/// Forces overlay mode onto the caller's options so the embedded
/// results page resolves with modal semantics.
fn overlay_params(params: &WidgetParams) -> WidgetParams {
    let mut params = params.clone();
    let mut options = params.options.take().unwrap_or_else(|| serde_json::json!({}));
    if let Some(tree) = options.as_object_mut() {
        tree.insert("mode".to_string(), serde_json::json!("overlay"));
    }
    params.options = Some(options);
    params
}

#[cfg(test)]
mod tests {
    use lodestone_core::config::WidgetMode;
    use serde_json::json;

    use super::*;

    #[test]
    fn configured_button_selectors_win_over_preset_triggers() {
        let configured = Selectors::One("#open-search".into());
        assert_eq!(
            trigger_selectors(Some(Preset::Shopify), Some(&configured)),
            ["#open-search"]
        );
    }

    #[test]
    fn shopify_preset_supplies_storefront_triggers() {
        assert_eq!(
            trigger_selectors(Some(Preset::Shopify), None),
            [r#"form[action="/search"]"#, r#"a[href="/search"]"#]
        );
    }

    #[test]
    fn without_preset_or_config_there_are_no_triggers() {
        assert!(trigger_selectors(None, None).is_empty());
        assert!(trigger_selectors(Some(Preset::Website), None).is_empty());
    }

    #[test]
    fn overlay_params_force_modal_mode_without_losing_caller_options() {
        let params = WidgetParams {
            options: Some(json!({"results": {"viewType": "list"}})),
            ..WidgetParams::default()
        };
        let config = merge_props(&overlay_params(&params), "overlay-1").unwrap();
        assert_eq!(config.options.mode, WidgetMode::Overlay);
        assert_eq!(
            config.options.results.view_type,
            lodestone_core::config::ViewType::List
        );
    }
}
