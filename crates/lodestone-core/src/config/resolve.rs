//! Configuration resolution.
//!
//! [`merge_props`] layers three sources into one effective
//! configuration: baseline defaults, the preset for the caller's
//! vertical, and the caller's own overrides, in that order of
//! increasing strength. The same inputs always produce the same
//! output; nothing here reads the environment.

use serde_json::Value;
use tracing::debug;

use crate::config::merge::{deep_merge, MergeOptions};
use crate::config::options::{AspectRatio, SortOption, WidgetOptions};
use crate::config::params::{FilterSpec, WidgetParams};
use crate::config::preset::Preset;
use crate::config::tracking::Tracking;
use crate::error::ConfigError;
use crate::fields::FieldDictionary;

/// Sort menu entry injected when every configured entry carries a sort
/// expression, so relevance ordering always stays reachable.
const RELEVANCE_SORT_NAME: &str = "Most relevant";

/// Everything a widget needs after configuration resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub options: WidgetOptions,
    pub fields: FieldDictionary,
    pub tracking: Option<Tracking>,
    /// Append `!important` to injected styles so storefront CSS cannot
    /// override the widget's layout.
    pub important_styles: bool,
    pub filters: Vec<FilterSpec>,
}

/// Resolves caller parameters into an effective configuration.
///
/// The layering, weakest first:
///
/// 1. [`WidgetOptions::standard`] seeded with `widget_id`
/// 2. the preset named by `params.preset`, contributing options,
///    tracking, field mappings, and a style-priority flag
/// 3. caller field mappings, merged over the preset's
/// 4. caller options, deep-merged over everything (arrays replace)
///
/// After layering, two normalizations run: the image aspect ratio
/// collapses to complete per-layout form when the caller touched it,
/// and a relevance entry is prepended to the sort menu when no entry
/// offers one. Caller tracking always replaces preset tracking; an
/// unrecognized tag replaces it with no tracking.
///
/// Unrecognized preset names and tracking tags degrade to "not given".
/// The only failures are structural: caller options that cannot merge
/// into the typed options tree.
pub fn merge_props(params: &WidgetParams, widget_id: &str) -> Result<ResolvedConfig, ConfigError> {
    let mut options_tree = serde_json::to_value(WidgetOptions::standard(widget_id))
        .map_err(|err| ConfigError::InvalidOptions(err.to_string()))?;

    let preset = match params.preset.as_deref() {
        Some(name) => {
            let parsed = Preset::parse(name);
            if parsed.is_none() {
                debug!(preset = %name, "unrecognized preset, continuing without one");
            }
            parsed
        }
        None => None,
    };
    let overlay = preset
        .map(|preset| preset.overlay(params.fields.as_ref()))
        .unwrap_or_default();
    if !overlay.options.is_null() {
        deep_merge(&mut options_tree, &overlay.options, MergeOptions::default());
    }

    let mut fields = overlay.fields.unwrap_or_default();
    if let Some(entries) = &params.fields {
        fields.merge_text_entries(entries);
    }

    if let Some(caller_options) = &params.options {
        deep_merge(&mut options_tree, caller_options, MergeOptions::default());
    }

    let mut options: WidgetOptions = serde_json::from_value(options_tree)
        .map_err(|err| ConfigError::InvalidOptions(err.to_string()))?;

    if let Some(requested) = caller_aspect_ratio(params) {
        let resolved = AspectRatio::resolve(options.results.image_aspect_ratio, requested);
        options.results.image_aspect_ratio = AspectRatio::Split(resolved);
    }

    inject_relevance_sort(&mut options);

    // Caller tracking replaces whatever the preset chose, even when
    // its tag is unrecognized: an explicit tracking entry the library
    // cannot interpret means no tracking at all.
    let mut tracking = overlay.tracking;
    if let Some(input) = &params.tracking {
        tracking = input.parse();
        if tracking.is_none() {
            debug!("unrecognized tracking config, disabling tracking");
        }
    }

    // The preset's style-priority flag wins over the caller's: a
    // vertical that needs `!important` to survive theme CSS needs it
    // regardless of what the embed says.
    let important_styles = overlay
        .important_styles
        .or(params.important_styles)
        .unwrap_or(false);

    Ok(ResolvedConfig {
        options,
        fields,
        tracking,
        important_styles,
        filters: params.filters.clone(),
    })
}

/// The caller's own aspect ratio value, before merging, in whichever
/// form they wrote it. Resolution only runs when this is present;
/// untouched ratios keep the shape the defaults and preset gave them.
fn caller_aspect_ratio(params: &WidgetParams) -> Option<AspectRatio> {
    let value = params
        .options
        .as_ref()?
        .pointer("/results/imageAspectRatio")?;
    match serde_json::from_value(value.clone()) {
        Ok(ratio) => Some(ratio),
        Err(_) => {
            debug!("unusable imageAspectRatio override, keeping merged value");
            None
        }
    }
}

/// Prepends the relevance entry when the menu is non-empty and every
/// entry sorts by something. A menu that already offers an
/// empty-valued entry keeps it wherever the configuration put it.
fn inject_relevance_sort(options: &mut WidgetOptions) {
    let sort_options = &mut options.sorting.options;
    if sort_options.is_empty() {
        return;
    }
    if sort_options.iter().any(|option| option.value.is_empty()) {
        return;
    }
    sort_options.insert(0, SortOption::new(RELEVANCE_SORT_NAME, ""));
}
