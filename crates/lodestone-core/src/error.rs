//! Error types shared across the core crate.
//!
//! Errors carry plain `String` payloads rather than source errors so they
//! stay `Clone` and can cross async channel and FFI boundaries intact.

use thiserror::Error;

/// Errors raised while resolving widget configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The embedded JSON config could not be parsed at all.
    #[error("invalid widget config JSON: {0}")]
    InvalidJson(String),

    /// The config parsed as JSON but a value had the wrong shape,
    /// e.g. a string where an object was required.
    #[error("invalid widget options: {0}")]
    InvalidOptions(String),

    /// The widget type tag was not one of the supported widgets.
    #[error("unknown widget type: {0}")]
    UnknownWidget(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::InvalidJson(err.to_string())
    }
}

/// Errors raised while reading or writing URL query parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyncError {
    /// No browsing context is available (e.g. running outside a window).
    #[error("no browsing context available")]
    BrowserUnavailable,

    /// The history API rejected a navigation.
    #[error("history navigation failed: {0}")]
    NavigationFailed(String),
}

/// Errors raised by the numeric range helpers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    /// A range must have exactly a lower and an upper bound.
    #[error("expected exactly two range bounds, got {0}")]
    InvalidLength(usize),

    /// A bound was not a finite number.
    #[error("range bound is not a finite number: {0}")]
    NotNumeric(String),
}
