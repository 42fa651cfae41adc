//! Caller-supplied widget parameters.
//!
//! One struct covers every widget type; fields that only apply to a
//! particular widget (e.g. `selector` for input bindings) simply go
//! unused elsewhere, the same way the embed config treats them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::options::Selectors;
use crate::config::tracking::TrackingInput;
use crate::error::ConfigError;

/// The pipeline to query: either just a name or a name with a pinned
/// version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PipelineSpec {
    Name(String),
    Versioned {
        name: String,
        #[serde(default)]
        version: Option<String>,
    },
}

impl Default for PipelineSpec {
    fn default() -> Self {
        PipelineSpec::Name(String::new())
    }
}

impl PipelineSpec {
    pub fn name(&self) -> &str {
        match self {
            PipelineSpec::Name(name) => name,
            PipelineSpec::Versioned { name, .. } => name,
        }
    }

    pub fn version(&self) -> Option<&str> {
        match self {
            PipelineSpec::Name(_) => None,
            PipelineSpec::Versioned { version, .. } => version.as_deref(),
        }
    }
}

/// Where a search input sends the user on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RedirectTarget {
    pub url: String,
    pub query_param_name: Option<String>,
}

impl RedirectTarget {
    /// The query parameter carrying the search text, `q` by default.
    pub fn param_name(&self) -> &str {
        self.query_param_name.as_deref().unwrap_or("q")
    }
}

/// A facet filter rendered beside the results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    /// URL parameter and internal identity of the filter.
    pub name: String,
    /// Record field the filter buckets on.
    pub field: String,
    pub title: String,
    pub searchable: bool,
    /// The record field holds multiple values per record.
    pub array: bool,
    /// Numeric min/max filter; state serializes as `min:max`.
    pub range: bool,
    /// Display transform for option labels, e.g. `capitalize`. Passed
    /// through to rendering untouched.
    pub text_transform: Option<String>,
}

/// Everything a host page can hand to a widget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetParams {
    pub account: String,
    pub collection: String,
    pub pipeline: PipelineSpec,
    pub endpoint: Option<String>,
    #[serde(rename = "clickTokenURL")]
    pub click_token_url: Option<String>,
    /// Preset name; unrecognized names resolve to no preset.
    pub preset: Option<String>,
    pub tracking: Option<TrackingInput>,
    /// Display-key to record-field mappings, layered over the preset's.
    pub fields: Option<Map<String, Value>>,
    pub default_filter: Option<String>,
    pub variables: Option<Map<String, Value>>,
    /// Pipeline config values passed through to the search transport.
    pub config: Option<Map<String, Value>>,
    /// Deep partial of [`WidgetOptions`](crate::config::WidgetOptions).
    pub options: Option<Value>,
    pub filters: Vec<FilterSpec>,
    /// Input binding: selector for the existing inputs to adopt.
    pub selector: Option<String>,
    /// Input binding: theme elements to remove from the page.
    pub omitted_element_selectors: Option<Selectors>,
    pub redirect: Option<RedirectTarget>,
    pub important_styles: Option<bool>,
    pub theme: Option<Value>,
    pub disable_default_styles: bool,
    pub currency: Option<String>,
}

impl WidgetParams {
    /// Parses an embed config JSON document.
    pub fn from_json(config: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(config)?)
    }
}
