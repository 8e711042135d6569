//! Rendering module for turning repaired Markdown into printable HTML.

mod html;
mod options;

pub use html::{is_converter_available, to_html};
pub use options::HtmlOptions;
