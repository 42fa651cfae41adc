//! Dioxus search widgets for arbitrary host pages.
//!
//! Four widgets built on [`lodestone_core`]:
//!
//! - [`SearchResults`](widgets::SearchResults): a full results page with
//!   input, sorting, pagination, and URL-synchronized state
//! - [`SearchInput`](widgets::SearchInput): a standalone input that
//!   redirects to a results page on submit
//! - [`InputBinding`](widgets::InputBinding): adopts an existing input
//!   on the host page instead of rendering its own
//! - [`Overlay`](widgets::Overlay): a modal results page opened from
//!   host-page trigger elements
//!
//! The crate also carries the browser half of the core's history
//! abstraction ([`location::BrowserLocation`]) and the hooks that tie
//! core bindings into the component lifecycle.

pub mod hooks;
pub mod location;
pub mod mount;
pub mod widgets;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use location::PlatformLocation;
pub use mount::{Widget, WidgetKind, WidgetSpec};
pub use widgets::{InputBinding, Overlay, SearchInput, SearchRequest, SearchResults};
