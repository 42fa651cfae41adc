//! Numeric range helpers used for filter query parameters.
//!
//! A range is a pair of numeric bounds `[min, max]`. On the URL it is
//! rendered as `min:max` with JavaScript-style number formatting, so
//! `[1.0, 1.5]` becomes `1:1.5` rather than `1.0:1.5`.

use serde_json::Value;

use crate::error::RangeError;

/// Returns `true` if `value` is a two-element array of numbers.
///
/// Used to classify filter state before serializing it to the URL; any
/// other shape (wrong arity, non-numeric elements, non-arrays) is not a
/// range and is serialized as a plain list instead.
pub fn is_range(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.len() == 2 && items.iter().all(Value::is_number),
        _ => false,
    }
}

/// Serializes a range as a `min:max` query parameter value.
///
/// Bounds keep their natural order; `[3, 1]` serializes as `3:1` without
/// reordering. Integral bounds drop the decimal point.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(range_to_param(&[1.0, 1.5])?, "1:1.5");
/// assert_eq!(range_to_param(&[3.0, 1.0])?, "3:1");
/// ```
pub fn range_to_param(range: &[f64]) -> Result<String, RangeError> {
    if range.len() != 2 {
        return Err(RangeError::InvalidLength(range.len()));
    }
    for bound in range {
        if !bound.is_finite() {
            return Err(RangeError::NotNumeric(bound.to_string()));
        }
    }
    Ok(format!("{}:{}", format_bound(range[0]), format_bound(range[1])))
}

/// Parses a `min:max` query parameter value back into a range.
///
/// The inverse of [`range_to_param`]. Fails if the value does not have
/// exactly two `:`-separated parts or either part is not a finite number.
pub fn param_to_range(param: &str) -> Result<[f64; 2], RangeError> {
    let parts: Vec<&str> = param.split(':').collect();
    if parts.len() != 2 {
        return Err(RangeError::InvalidLength(parts.len()));
    }
    let mut bounds = [0.0; 2];
    for (slot, part) in bounds.iter_mut().zip(&parts) {
        let parsed: f64 = part
            .trim()
            .parse()
            .map_err(|_| RangeError::NotNumeric((*part).to_string()))?;
        if !parsed.is_finite() {
            return Err(RangeError::NotNumeric((*part).to_string()));
        }
        *slot = parsed;
    }
    Ok(bounds)
}

/// Formats a bound the way JavaScript's `Number#toString` would,
/// i.e. `1` rather than `1.0`.
fn format_bound(bound: f64) -> String {
    format!("{bound}")
}
