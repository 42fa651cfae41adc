//! The typed widget options model.
//!
//! These structs are the shape every merge resolves into. They
//! serialize to the same camelCase tree the embed config uses, so the
//! merge can run over raw JSON and deserialize back without a mapping
//! layer in between.

use serde::{Deserialize, Serialize};

/// How the widget presents itself on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetMode {
    /// Inline results rendered where the widget mounts.
    #[default]
    Standard,
    /// A modal opened from a trigger element.
    Overlay,
}

/// Search input behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Standard,
    Typeahead,
    Suggestions,
    Results,
    #[default]
    Instant,
}

/// Where the input sits relative to the results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPosition {
    Top,
    #[default]
    Aside,
}

/// Result list layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    #[default]
    Grid,
    List,
}

/// CSS `object-fit` for result images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectFit {
    Cover,
    Contain,
    Fill,
}

/// When history entries are written for state changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncUrlMode {
    /// No URL synchronization at all.
    None,
    /// Overwrite the current entry on every change.
    Replace,
    /// Each change is its own entry, reachable via Back.
    #[default]
    Push,
}

/// An aspect ratio, either one number for every layout or split by
/// layout. Callers may supply either form; after resolution the
/// [`Split`](AspectRatio::Split) form with both axes present is what
/// widgets consume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AspectRatio {
    Uniform(f64),
    Split(LayoutRatios),
}

/// Per-layout aspect ratios; a missing axis falls back to square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutRatios {
    pub grid: Option<f64>,
    pub list: Option<f64>,
}

impl AspectRatio {
    /// Completes a ratio against an existing one, the requested value
    /// winning axis by axis. A uniform request covers both axes, a
    /// split request only the axes it names.
    pub fn resolve(existing: AspectRatio, requested: AspectRatio) -> LayoutRatios {
        let base = existing.per_layout();
        let wanted = requested.per_layout();
        LayoutRatios {
            grid: wanted.grid.or(base.grid),
            list: wanted.list.or(base.list),
        }
    }

    fn per_layout(self) -> LayoutRatios {
        match self {
            AspectRatio::Uniform(ratio) => LayoutRatios {
                grid: Some(ratio),
                list: Some(ratio),
            },
            AspectRatio::Split(ratios) => ratios,
        }
    }
}

impl LayoutRatios {
    pub fn grid_or_square(&self) -> f64 {
        self.grid.unwrap_or(1.0)
    }

    pub fn list_or_square(&self) -> f64 {
        self.list.unwrap_or(1.0)
    }
}

/// Per-layout image fitting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutObjectFit {
    pub grid: Option<ObjectFit>,
    pub list: Option<ObjectFit>,
}

/// One or several CSS selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selectors {
    One(String),
    Many(Vec<String>),
}

impl Selectors {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        match self {
            Selectors::One(selector) => std::slice::from_ref(selector),
            Selectors::Many(selectors) => selectors.as_slice(),
        }
        .iter()
        .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputOptions {
    pub mode: InputMode,
    pub position: InputPosition,
    pub placeholder: Option<String>,
    pub hide: bool,
}

impl Default for InputOptions {
    fn default() -> Self {
        InputOptions {
            mode: InputMode::Instant,
            position: InputPosition::Aside,
            placeholder: None,
            hide: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultsOptions {
    pub show_status: bool,
    pub image_aspect_ratio: AspectRatio,
    pub image_object_fit: LayoutObjectFit,
    pub view_type: ViewType,
    pub mobile_view_type: ViewType,
}

impl Default for ResultsOptions {
    fn default() -> Self {
        ResultsOptions {
            show_status: true,
            image_aspect_ratio: AspectRatio::Split(LayoutRatios {
                grid: Some(1.0),
                list: Some(1.0),
            }),
            image_object_fit: LayoutObjectFit {
                grid: Some(ObjectFit::Cover),
                list: Some(ObjectFit::Contain),
            },
            view_type: ViewType::Grid,
            mobile_view_type: ViewType::List,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultsPerPageOptions {
    pub options: Vec<u32>,
}

impl Default for ResultsPerPageOptions {
    fn default() -> Self {
        ResultsPerPageOptions {
            options: vec![15, 25, 50, 100],
        }
    }
}

impl ResultsPerPageOptions {
    /// The page size in effect before the user picks one.
    pub fn initial(&self) -> u32 {
        self.options.first().copied().unwrap_or(15)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationOptions {
    pub scroll_to_top: bool,
    /// Selector scrolled into view on page changes; defaults to the
    /// widget's own container.
    pub scroll_target: Option<String>,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        PaginationOptions {
            scroll_to_top: true,
            scroll_target: None,
        }
    }
}

/// One entry in the sort menu. An empty `value` means relevance
/// ordering, i.e. no sort expression sent with the search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortOption {
    pub name: String,
    pub value: String,
}

impl SortOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        SortOption {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SortingOptions {
    pub options: Vec<SortOption>,
}

/// Names of the query parameters the widget owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UrlParams {
    pub q: String,
}

impl Default for UrlParams {
    fn default() -> Self {
        UrlParams { q: "q".to_string() }
    }
}

/// The complete options tree for one widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetOptions {
    pub input: InputOptions,
    pub results: ResultsOptions,
    pub results_per_page: ResultsPerPageOptions,
    pub pagination: PaginationOptions,
    pub sorting: SortingOptions,
    #[serde(rename = "syncURL")]
    pub sync_url: SyncUrlMode,
    pub url_params: UrlParams,
    pub mode: WidgetMode,
    /// Overlay mode: selectors whose activation opens the modal.
    pub button_selector: Option<Selectors>,
    /// Overlay mode: input that should hand focus to the modal.
    pub input_selector: Option<String>,
    pub aria_label: Option<String>,
    /// Overlay mode: open the modal as soon as the widget mounts.
    pub default_open: bool,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        WidgetOptions {
            input: InputOptions::default(),
            results: ResultsOptions::default(),
            results_per_page: ResultsPerPageOptions::default(),
            pagination: PaginationOptions::default(),
            sorting: SortingOptions::default(),
            sync_url: SyncUrlMode::Push,
            url_params: UrlParams::default(),
            mode: WidgetMode::Standard,
            button_selector: None,
            input_selector: None,
            aria_label: None,
            default_open: false,
        }
    }
}

impl WidgetOptions {
    /// The baseline configuration before preset and caller layers
    /// apply. `widget_id` seeds the pagination scroll target so page
    /// changes scroll back to this widget's container.
    pub fn standard(widget_id: &str) -> Self {
        WidgetOptions {
            pagination: PaginationOptions {
                scroll_to_top: true,
                scroll_target: Some(format!("#{widget_id}")),
            },
            ..WidgetOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults_serialize_with_embed_config_key_names() {
        let tree = serde_json::to_value(WidgetOptions::standard("search-ui-1")).unwrap();
        assert_eq!(tree["syncURL"], json!("push"));
        assert_eq!(tree["urlParams"]["q"], json!("q"));
        assert_eq!(tree["resultsPerPage"]["options"], json!([15, 25, 50, 100]));
        assert_eq!(tree["pagination"]["scrollTarget"], json!("#search-ui-1"));
        assert_eq!(tree["results"]["imageAspectRatio"], json!({"grid": 1.0, "list": 1.0}));
        assert_eq!(tree["results"]["mobileViewType"], json!("list"));
        assert_eq!(tree["input"]["mode"], json!("instant"));
    }

    #[test]
    fn aspect_ratio_accepts_both_forms() {
        assert_eq!(
            serde_json::from_value::<AspectRatio>(json!(0.5)).unwrap(),
            AspectRatio::Uniform(0.5)
        );
        assert_eq!(
            serde_json::from_value::<AspectRatio>(json!({"grid": 2})).unwrap(),
            AspectRatio::Split(LayoutRatios {
                grid: Some(2.0),
                list: None,
            })
        );
    }

    #[test]
    fn uniform_requests_cover_both_axes() {
        let existing = AspectRatio::Split(LayoutRatios {
            grid: Some(1.0),
            list: Some(1.0),
        });
        let resolved = AspectRatio::resolve(existing, AspectRatio::Uniform(0.5));
        assert_eq!(resolved.grid_or_square(), 0.5);
        assert_eq!(resolved.list_or_square(), 0.5);
    }

    #[test]
    fn split_requests_only_touch_named_axes() {
        let existing = AspectRatio::Split(LayoutRatios {
            grid: Some(0.5625),
            list: Some(1.0),
        });
        let requested = AspectRatio::Split(LayoutRatios {
            grid: Some(2.0),
            list: None,
        });
        let resolved = AspectRatio::resolve(existing, requested);
        assert_eq!(resolved.grid, Some(2.0));
        assert_eq!(resolved.list, Some(1.0));
    }

    #[test]
    fn missing_axes_fall_back_to_square() {
        let ratios = LayoutRatios::default();
        assert_eq!(ratios.grid_or_square(), 1.0);
        assert_eq!(ratios.list_or_square(), 1.0);
    }

    #[test]
    fn selectors_iterate_one_or_many() {
        let one = Selectors::One("#open-search".into());
        assert_eq!(one.iter().collect::<Vec<_>>(), ["#open-search"]);

        let many: Selectors = serde_json::from_value(json!(["a", "b"])).unwrap();
        assert_eq!(many.iter().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn sync_url_mode_parses_lowercase_tags() {
        assert_eq!(
            serde_json::from_value::<SyncUrlMode>(json!("none")).unwrap(),
            SyncUrlMode::None
        );
        assert_eq!(
            serde_json::from_value::<SyncUrlMode>(json!("replace")).unwrap(),
            SyncUrlMode::Replace
        );
    }
}
