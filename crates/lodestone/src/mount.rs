//! Embed-config parsing and widget mounting.
//!
//! A host page embeds a widget as a JSON config plus a widget type
//! tag. [`WidgetSpec`] parses that pair; [`Widget`] dispatches to the
//! matching component; [`launch`] boots a Dioxus app around a single
//! spec, which is how the published bundle mounts itself.

use dioxus::prelude::*;
use lodestone_core::config::WidgetParams;
use lodestone_core::error::ConfigError;

use crate::widgets::{binding_selector, InputBinding, Overlay, SearchInput, SearchResults};

/// The widget types a host page can embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    SearchResults,
    SearchInput,
    InputBinding,
    Overlay,
}

impl WidgetKind {
    /// Resolves an embed tag. Unlike presets, an unknown widget tag is
    /// an error: there is nothing sensible to degrade to.
    pub fn parse(tag: &str) -> Result<WidgetKind, ConfigError> {
        match tag {
            "search-results" => Ok(WidgetKind::SearchResults),
            "search-input" => Ok(WidgetKind::SearchInput),
            "search-input-binding" => Ok(WidgetKind::InputBinding),
            "overlay" => Ok(WidgetKind::Overlay),
            other => Err(ConfigError::UnknownWidget(other.to_string())),
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            WidgetKind::SearchResults => "search-results",
            WidgetKind::SearchInput => "search-input",
            WidgetKind::InputBinding => "search-input-binding",
            WidgetKind::Overlay => "overlay",
        }
    }
}

/// One widget ready to mount: its type, its element id, and its
/// parsed parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetSpec {
    pub kind: WidgetKind,
    pub widget_id: String,
    pub params: WidgetParams,
}

impl WidgetSpec {
    /// Parses an embed config. Malformed JSON and unknown widget tags
    /// report a [`ConfigError`]; they never panic.
    pub fn from_json(
        kind_tag: &str,
        widget_id: impl Into<String>,
        config: &str,
    ) -> Result<WidgetSpec, ConfigError> {
        Ok(WidgetSpec {
            kind: WidgetKind::parse(kind_tag)?,
            widget_id: widget_id.into(),
            params: WidgetParams::from_json(config)?,
        })
    }

    /// The host-page selector this widget attaches to, for the widget
    /// types that adopt existing elements.
    pub fn attach_selector(&self) -> Option<String> {
        match self.kind {
            WidgetKind::InputBinding => binding_selector(&self.params),
            _ => self.params.selector.clone(),
        }
    }
}

/// Renders the component matching a spec.
#[component]
pub fn Widget(spec: WidgetSpec) -> Element {
    match spec.kind {
        WidgetKind::SearchResults => rsx! {
            SearchResults { widget_id: spec.widget_id, params: spec.params }
        },
        WidgetKind::SearchInput => rsx! {
            SearchInput { widget_id: spec.widget_id, params: spec.params }
        },
        WidgetKind::InputBinding => rsx! {
            InputBinding { params: spec.params }
        },
        WidgetKind::Overlay => rsx! {
            Overlay { widget_id: spec.widget_id, params: spec.params }
        },
    }
}

/// Boots a Dioxus app rendering a single widget.
pub fn launch(spec: WidgetSpec) {
    dioxus::LaunchBuilder::new()
        .with_context(spec)
        .launch(widget_root);
}

fn widget_root() -> Element {
    let spec = use_context::<WidgetSpec>();
    rsx! {
        Widget { spec }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for tag in ["search-results", "search-input", "search-input-binding", "overlay"] {
            assert_eq!(WidgetKind::parse(tag).unwrap().tag(), tag);
        }
    }

    #[test]
    fn unknown_tags_are_an_error() {
        let err = WidgetKind::parse("search-widget").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownWidget(_)));
    }

    #[test]
    fn specs_parse_embed_configs() {
        let spec = WidgetSpec::from_json(
            "search-results",
            "search-ui-1",
            r#"{"account": "1594153711901724220", "collection": "shop", "pipeline": "query"}"#,
        )
        .unwrap();
        assert_eq!(spec.kind, WidgetKind::SearchResults);
        assert_eq!(spec.widget_id, "search-ui-1");
        assert_eq!(spec.params.pipeline.name(), "query");
    }

    #[test]
    fn malformed_configs_surface_the_parse_error() {
        let err = WidgetSpec::from_json("search-results", "w", "{").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson(_)));
    }

    #[test]
    fn binding_specs_fall_back_to_the_preset_selector() {
        let spec =
            WidgetSpec::from_json("search-input-binding", "w", r#"{"preset": "shopify"}"#).unwrap();
        assert_eq!(
            spec.attach_selector().as_deref(),
            Some(r#"form[action="/search"] input[name="q"]"#)
        );
    }

    #[test]
    fn results_specs_use_the_caller_selector() {
        let spec = WidgetSpec::from_json(
            "search-results",
            "w",
            r##"{"selector": "#search-mount"}"##,
        )
        .unwrap();
        assert_eq!(spec.attach_selector().as_deref(), Some("#search-mount"));
    }
}
