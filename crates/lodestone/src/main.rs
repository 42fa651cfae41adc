//! Demo harness: mounts one of every widget from embedded configs.

use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use lodestone::{Widget, WidgetSpec};

const MAIN_CSS: Asset = asset!("/assets/lodestone.css");

/// The demo embed configs, one per widget type. These mirror what a
/// host page would inline next to the script tag.
const DEMO_WIDGETS: &[(&str, &str, &str)] = &[
    (
        "search-results",
        "search-ui-demo",
        r#"{
            "account": "1594153711901724220",
            "collection": "shop-products",
            "pipeline": "query",
            "preset": "shopify",
            "filters": [
                {"name": "vendor", "field": "vendor", "title": "Vendor", "array": true},
                {"name": "price", "field": "max_price", "title": "Price", "range": true}
            ]
        }"#,
    ),
    (
        "search-input",
        "search-input-demo",
        r#"{
            "account": "1594153711901724220",
            "collection": "site-pages",
            "pipeline": "website",
            "preset": "website",
            "redirect": {"url": "/search", "queryParamName": "q"},
            "options": {"input": {"placeholder": "Search this site"}}
        }"#,
    ),
    (
        "search-input-binding",
        "search-binding-demo",
        r#"{
            "account": "1594153711901724220",
            "collection": "shop-products",
            "pipeline": "query",
            "preset": "shopify"
        }"#,
    ),
    (
        "overlay",
        "search-overlay-demo",
        r##"{
            "account": "1594153711901724220",
            "collection": "site-pages",
            "pipeline": "website",
            "preset": "website",
            "options": {"buttonSelector": "#ls-demo-open-overlay", "ariaLabel": "Site search"}
        }"##,
    ),
];

fn main() {
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    #[cfg(any(feature = "web", feature = "desktop"))]
    dioxus::launch(App);

    #[cfg(not(any(feature = "web", feature = "desktop")))]
    {
        let _ = App;
        eprintln!("lodestone demo: build with --features web (wasm32) or --features desktop");
    }
}

fn demo_specs() -> Vec<WidgetSpec> {
    DEMO_WIDGETS
        .iter()
        .filter_map(|(tag, id, config)| match WidgetSpec::from_json(tag, *id, config) {
            Ok(spec) => Some(spec),
            Err(err) => {
                error!(widget = %tag, %err, "demo config failed to parse");
                None
            }
        })
        .collect()
}

#[component]
fn App() -> Element {
    let specs = use_hook(demo_specs);

    rsx! {
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/lodestone.css")} }
        }

        main { class: "ls-demo",
            h1 { "Lodestone widgets" }
            button { id: "ls-demo-open-overlay", class: "ls-btn", "Open search overlay" }
            for spec in specs.iter() {
                section { key: "{spec.widget_id}",
                    h2 { "{spec.kind.tag()}" }
                    Widget { spec: spec.clone() }
                }
            }
        }
    }
}
