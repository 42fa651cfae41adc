//! Vertical presets.
//!
//! A preset is the configuration a vertical ships with out of the box.
//! It layers between the baseline defaults and the caller's own
//! overrides: stronger than the defaults, weaker than anything the
//! caller states explicitly.

use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};

use crate::config::tracking::Tracking;
use crate::fields::shopify::shopify_field_mapping;
use crate::fields::FieldDictionary;

/// The selector Shopify storefront themes give their search form.
const SHOPIFY_SEARCH_FORM: &str = r#"form[action="/search"]"#;

static SHOPIFY_OPTIONS: Lazy<Value> = Lazy::new(|| {
    json!({
        "results": {
            "imageAspectRatio": { "grid": 9.0 / 16.0, "list": 1 },
            "imageObjectFit": { "grid": "cover", "list": "cover" },
            "viewType": "grid",
            "mobileViewType": "grid",
        },
        "sorting": {
            "options": [
                { "name": "Price: Low to High", "value": "max_price" },
                { "name": "Price: High to Low", "value": "-max_price" },
                { "name": "Alphabetical: A to Z", "value": "title" },
                { "name": "Alphabetical: Z to A", "value": "-title" },
                { "name": "Date: Newest to Oldest", "value": "-created_at" },
                { "name": "Date: Oldest to Newest", "value": "created_at" },
            ],
        },
    })
});

static WEBSITE_OPTIONS: Lazy<Value> = Lazy::new(|| json!({ "syncURL": "push" }));

static APP_OPTIONS: Lazy<Value> = Lazy::new(|| {
    json!({
        "syncURL": "push",
        "results": { "mobileViewType": "grid" },
    })
});

/// Built-in vertical presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Shopify,
    Website,
    App,
}

/// One preset's contribution to a merge.
#[derive(Debug, Clone, Default)]
pub struct PresetOverlay {
    /// Partial options tree, `Null` when the preset has none.
    pub options: Value,
    pub tracking: Option<Tracking>,
    pub fields: Option<FieldDictionary>,
    pub important_styles: Option<bool>,
}

impl Preset {
    /// Resolves a preset name. Names are case-sensitive and
    /// unrecognized ones resolve to no preset at all.
    pub fn parse(name: &str) -> Option<Preset> {
        match name {
            "shopify" => Some(Preset::Shopify),
            "website" => Some(Preset::Website),
            "app" => Some(Preset::App),
            _ => None,
        }
    }

    /// The configuration this preset layers beneath caller overrides.
    ///
    /// `caller_fields` is consulted by the app preset, whose click
    /// tracking follows the caller's `url` field mapping when that
    /// mapping is plain text.
    pub fn overlay(self, caller_fields: Option<&Map<String, Value>>) -> PresetOverlay {
        match self {
            Preset::Shopify => PresetOverlay {
                options: SHOPIFY_OPTIONS.clone(),
                tracking: Some(Tracking::pos_neg("id")),
                fields: Some(shopify_field_mapping()),
                important_styles: Some(true),
            },
            Preset::Website => PresetOverlay {
                options: WEBSITE_OPTIONS.clone(),
                tracking: Some(Tracking::click()),
                fields: None,
                important_styles: None,
            },
            Preset::App => PresetOverlay {
                options: APP_OPTIONS.clone(),
                tracking: caller_fields
                    .and_then(|fields| fields.get("url"))
                    .and_then(Value::as_str)
                    .map(Tracking::click_on),
                fields: None,
                important_styles: None,
            },
        }
    }

    /// Selector for the storefront input a binding widget should
    /// adopt when the caller names none.
    pub fn input_selector(self) -> Option<&'static str> {
        match self {
            Preset::Shopify => Some(r#"form[action="/search"] input[name="q"]"#),
            Preset::Website | Preset::App => None,
        }
    }

    /// Selectors whose activation opens the search overlay.
    pub fn overlay_trigger_selectors(self) -> &'static [&'static str] {
        match self {
            Preset::Shopify => &[SHOPIFY_SEARCH_FORM, r#"a[href="/search"]"#],
            Preset::Website | Preset::App => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_case_sensitively() {
        assert_eq!(Preset::parse("shopify"), Some(Preset::Shopify));
        assert_eq!(Preset::parse("website"), Some(Preset::Website));
        assert_eq!(Preset::parse("app"), Some(Preset::App));
        assert_eq!(Preset::parse("Shopify"), None);
        assert_eq!(Preset::parse("storefront"), None);
        assert_eq!(Preset::parse(""), None);
    }

    #[test]
    fn shopify_ships_tracking_fields_and_forced_styles() {
        let overlay = Preset::Shopify.overlay(None);
        assert_eq!(overlay.tracking, Some(Tracking::pos_neg("id")));
        assert_eq!(overlay.important_styles, Some(true));
        assert_eq!(overlay.fields, Some(shopify_field_mapping()));
        assert_eq!(
            overlay.options["sorting"]["options"].as_array().map(Vec::len),
            Some(6)
        );
    }

    #[test]
    fn website_defaults_to_plain_click_tracking() {
        let overlay = Preset::Website.overlay(None);
        assert_eq!(overlay.tracking, Some(Tracking::click()));
        assert_eq!(overlay.fields, None);
    }

    #[test]
    fn app_tracks_clicks_only_on_a_text_url_mapping() {
        let fields = json!({"url": "/p/123"}).as_object().cloned().unwrap();
        let overlay = Preset::App.overlay(Some(&fields));
        assert_eq!(overlay.tracking, Some(Tracking::click_on("/p/123")));

        let fields = json!({"url": 7}).as_object().cloned().unwrap();
        assert_eq!(Preset::App.overlay(Some(&fields)).tracking, None);
        assert_eq!(Preset::App.overlay(None).tracking, None);
    }

    #[test]
    fn only_shopify_knows_storefront_selectors() {
        assert_eq!(
            Preset::Shopify.input_selector(),
            Some(r#"form[action="/search"] input[name="q"]"#)
        );
        assert_eq!(
            Preset::Shopify.overlay_trigger_selectors(),
            [r#"form[action="/search"]"#, r#"a[href="/search"]"#]
        );
        assert_eq!(Preset::Website.input_selector(), None);
        assert!(Preset::App.overlay_trigger_selectors().is_empty());
    }
}
