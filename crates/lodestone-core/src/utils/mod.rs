//! Small parsing helpers shared by the widgets and their filter UI.

pub mod ranges;
pub mod styles;
pub mod url;
