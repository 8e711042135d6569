//! Model types for pasted report text.
//!
//! Everything here is transient: values are built and dropped within one
//! repair run and carry no state between runs.

mod document;
mod heading;
mod line;
mod table;

pub use document::Document;
pub use heading::{HeadingLevel, HeadingMatch};
pub use line::{trim_line, Line};
pub use table::{RowKind, TableFragment, TableRow};
