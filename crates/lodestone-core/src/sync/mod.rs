//! URL query parameter synchronization.
//!
//! Widget state (query text, filters, pagination, sorting) is mirrored
//! into the page URL so searches survive reloads and back/forward
//! navigation. The pieces here are layered:
//!
//! * [`query_string`] edits a raw query string without touching history
//! * [`location`] abstracts the history store behind [`LocationStore`],
//!   with an in-memory implementation for native targets and tests
//! * [`binding`] ties one parameter key to a store, with default
//!   elision and no-op suppression
//! * [`debounce`] coalesces rapid writes into one history entry
//!
//! Nothing in this module talks to the browser directly; the widget
//! crate supplies a `web-sys` backed store on wasm32.

pub mod binding;
pub mod debounce;
pub mod location;
pub mod query_string;
pub mod value;

pub use binding::{BindingOptions, QueryParamBinding, WriteOutcome};
pub use location::{HistoryMode, LocationStore, MemoryLocation, Subscription};
pub use value::ParamValue;
