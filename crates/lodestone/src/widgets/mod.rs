//! The four embeddable widgets.

mod input_binding;
mod overlay;
mod search_input;
mod search_results;

pub use input_binding::{binding_selector, InputBinding};
pub use overlay::Overlay;
pub use search_input::SearchInput;
pub use search_results::SearchResults;

/// A snapshot of the widget's live search state, emitted to the host's
/// transport layer whenever the user changes something. The widget
/// never performs the search itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchRequest {
    pub query: String,
    /// Sort expression, empty for relevance ordering.
    pub sort: String,
    /// 1-based page number.
    pub page: u32,
    pub per_page: u32,
    /// Active filter selections, `(filter name, selected values)`.
    /// Range filters carry a single `min:max` value.
    pub filters: Vec<(String, Vec<String>)>,
}
