//! Hooks tying core state machinery into the component lifecycle.

mod use_breakpoints;
mod use_query_param;

pub use use_breakpoints::use_breakpoints;
pub use use_query_param::{
    use_location, use_query_param, QueryParam, QueryParamOptions, DEFAULT_DEBOUNCE_MS,
};
