//! Field dictionaries map display keys to record data.
//!
//! A widget renders display keys like `title`, `image`, or `price`;
//! the dictionary says where each one comes from in the raw search
//! record. Sources are either a plain field name, a `${field}`
//! template, or a derivation function computed from the whole record
//! (used by the Shopify mapping in [`shopify`]).

pub mod shopify;

use serde_json::{Map, Value};
use tracing::debug;

/// A derivation computed from the whole record.
pub type DeriveFn = fn(&Value) -> Value;

/// Where a display key's value comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldSource {
    /// Copy the named record field verbatim.
    Field(String),
    /// Interpolate `${field}` placeholders against the record.
    Template(String),
    /// Compute the value from the whole record.
    Derived(DeriveFn),
}

impl FieldSource {
    /// Classifies caller-supplied text: anything containing a `${`
    /// placeholder is a template, the rest are plain field names.
    pub fn from_text(text: &str) -> FieldSource {
        if text.contains("${") {
            FieldSource::Template(text.to_string())
        } else {
            FieldSource::Field(text.to_string())
        }
    }
}

/// An ordered map from display keys to field sources.
///
/// Insertion order is preserved and later inserts of an existing key
/// replace its source in place, so presets establish the base order
/// and caller overrides do not shuffle it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldDictionary {
    entries: Vec<(String, FieldSource)>,
}

impl FieldDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, source: FieldSource) {
        let key = key.into();
        match self.entries.iter_mut().find(|(name, _)| *name == key) {
            Some((_, existing)) => *existing = source,
            None => self.entries.push((key, source)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldSource> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, source)| source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSource)> {
        self.entries
            .iter()
            .map(|(key, source)| (key.as_str(), source))
    }

    /// Merges caller-supplied text mappings on top of this dictionary.
    /// Values that are not JSON strings carry no field semantics and
    /// are skipped.
    pub fn merge_text_entries(&mut self, entries: &Map<String, Value>) {
        for (key, value) in entries {
            match value.as_str() {
                Some(text) => self.insert(key.clone(), FieldSource::from_text(text)),
                None => debug!(key = %key, "ignoring non-string field mapping"),
            }
        }
    }

    /// Resolves every entry against a record, in dictionary order.
    pub fn resolve(&self, record: &Value) -> Map<String, Value> {
        self.entries
            .iter()
            .map(|(key, source)| (key.clone(), resolve_source(source, record)))
            .collect()
    }

    /// Resolves one display key, falling back to the record field of
    /// the same name when no mapping exists.
    pub fn resolve_field(&self, record: &Value, key: &str) -> Value {
        match self.get(key) {
            Some(source) => resolve_source(source, record),
            None => record.get(key).cloned().unwrap_or(Value::Null),
        }
    }
}

impl FromIterator<(String, FieldSource)> for FieldDictionary {
    fn from_iter<T: IntoIterator<Item = (String, FieldSource)>>(iter: T) -> Self {
        let mut fields = FieldDictionary::new();
        for (key, source) in iter {
            fields.insert(key, source);
        }
        fields
    }
}

fn resolve_source(source: &FieldSource, record: &Value) -> Value {
    match source {
        FieldSource::Field(name) => record.get(name).cloned().unwrap_or(Value::Null),
        FieldSource::Template(template) => Value::String(interpolate(template, record)),
        FieldSource::Derived(derive) => derive(record),
    }
}

/// Replaces each `${field}` placeholder with the record field's text.
/// Missing fields and non-scalar values render as empty text; an
/// unterminated placeholder is kept verbatim.
fn interpolate(template: &str, record: &Value) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                out.push_str(&text_of(record, &after[..end]));
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn text_of(record: &Value, field: &str) -> String {
    match record.get(field) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => String::new(),
    }
}
