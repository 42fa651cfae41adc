//! Wiring for the search transport collaborator.
//!
//! Widgets do not perform searches themselves; they assemble a
//! [`SearchContext`] describing what to query and how, and hand it to
//! whatever transport the host embeds. Everything here is plain data.

use serde_json::{Map, Value};

use crate::config::params::WidgetParams;
use crate::config::tracking::Tracking;
use crate::fields::FieldDictionary;

/// Identity of the collection and pipeline a widget queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineIdentity {
    pub account: String,
    pub collection: String,
    pub name: String,
    pub version: Option<String>,
    pub endpoint: Option<String>,
    pub click_token_url: Option<String>,
}

impl PipelineIdentity {
    pub fn from_params(params: &WidgetParams) -> Self {
        PipelineIdentity {
            account: params.account.clone(),
            collection: params.collection.clone(),
            name: params.pipeline.name().to_string(),
            version: params.pipeline.version().map(str::to_string),
            endpoint: params.endpoint.clone(),
            click_token_url: params.click_token_url.clone(),
        }
    }
}

/// Key/value variables sent with every search request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    values: Map<String, Value>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

impl From<Map<String, Value>> for Variables {
    fn from(values: Map<String, Value>) -> Self {
        Variables { values }
    }
}

/// Everything the search transport needs from one widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchContext {
    pub pipeline: PipelineIdentity,
    pub tracking: Option<Tracking>,
    pub fields: FieldDictionary,
    pub variables: Variables,
    /// Pipeline config values passed through untouched.
    pub config: Option<Map<String, Value>>,
    /// Filter expression applied to every search.
    pub default_filter: Option<String>,
}

/// Assembles the transport context from caller parameters plus the
/// resolved field dictionary and tracking.
pub fn build_search_context(
    params: &WidgetParams,
    fields: FieldDictionary,
    tracking: Option<Tracking>,
) -> SearchContext {
    SearchContext {
        pipeline: PipelineIdentity::from_params(params),
        tracking,
        fields,
        variables: params.variables.clone().map(Variables::from).unwrap_or_default(),
        config: params.config.clone(),
        default_filter: params.default_filter.clone(),
    }
}
