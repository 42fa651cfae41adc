//! Values a widget can bind to a query parameter.

/// A query parameter value as widgets produce it.
///
/// Parameters are stringly-typed on the URL; this enum captures the
/// source type so serialization and default comparison stay uniform.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Number(f64),
    Flag(bool),
    /// Multi-select filter state. Serializes comma-joined, and an empty
    /// list always clears the parameter.
    List(Vec<String>),
}

impl ParamValue {
    /// Renders the value the way it appears on the URL, before
    /// percent-encoding. Numbers use JavaScript-style formatting, so
    /// whole numbers drop the decimal point.
    pub fn to_param_string(&self) -> String {
        match self {
            ParamValue::Text(text) => text.clone(),
            ParamValue::Number(number) => format!("{number}"),
            ParamValue::Flag(flag) => flag.to_string(),
            ParamValue::List(items) => items.join(","),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(text: &str) -> Self {
        ParamValue::Text(text.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(text: String) -> Self {
        ParamValue::Text(text)
    }
}

impl From<f64> for ParamValue {
    fn from(number: f64) -> Self {
        ParamValue::Number(number)
    }
}

impl From<i32> for ParamValue {
    fn from(number: i32) -> Self {
        ParamValue::Number(number.into())
    }
}

impl From<usize> for ParamValue {
    fn from(number: usize) -> Self {
        ParamValue::Number(number as f64)
    }
}

impl From<bool> for ParamValue {
    fn from(flag: bool) -> Self {
        ParamValue::Flag(flag)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(items: Vec<String>) -> Self {
        ParamValue::List(items)
    }
}

impl From<&[&str]> for ParamValue {
    fn from(items: &[&str]) -> Self {
        ParamValue::List(items.iter().map(|item| item.to_string()).collect())
    }
}
