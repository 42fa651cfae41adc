//! Core logic for Lodestone search widgets.
//!
//! This crate is the platform-agnostic half of the widget library:
//! configuration resolution, field mapping, and URL parameter
//! synchronization, with no rendering and no browser types. The
//! `lodestone` crate layers the Dioxus components and `web-sys` glue
//! on top.
//!
//! # Modules
//!
//! - [`config`]: caller parameters, the typed options tree, presets,
//!   and the [`merge_props`](config::merge_props) resolution pipeline
//! - [`fields`]: display-key dictionaries and the Shopify mapping
//! - [`sync`]: query parameter bindings over an abstract history store
//! - [`context`]: the data bundle handed to the search transport
//! - [`utils`]: range, breakpoint, ratio, and URL parsing helpers

pub mod config;
pub mod context;
pub mod error;
pub mod fields;
pub mod platform;
pub mod sync;
pub mod utils;

pub use config::{merge_props, ResolvedConfig, WidgetOptions, WidgetParams};
pub use error::{ConfigError, RangeError, SyncError};
