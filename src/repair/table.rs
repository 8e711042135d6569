//! Collapsed table splitting.
//!
//! The source application pastes a caption, a header row and a separator row
//! (and sometimes body rows) on one physical line, e.g.
//!
//! ```text
//! Table 1: Results | A | B | | :--- | :--- |
//! ```
//!
//! Adjacent pipes separated only by whitespace mark where a row ended and the
//! next began. Splitting there, and moving the caption into its own
//! paragraph, gives back a table Markdown renderers accept:
//!
//! ```text
//! Table 1: Results
//!
//! | A | B |
//! | :--- | :--- |
//! ```

use regex::Regex;
use std::sync::OnceLock;

use crate::model::{RowKind, TableFragment, TableRow};

/// A pipe, whitespace, then another pipe: the seam between two rows.
fn row_break_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\|\s+\|").unwrap())
}

/// Scanner state while walking the split block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// First sub-line not yet examined; a caption may precede the first pipe
    SeekingPipe,
    /// Inside header rows, no separator seen yet
    InRow,
    /// A separator row has been seen; later rows are body rows
    SeenSeparator,
}

/// Split a collapsed table line into caption and rows.
///
/// The line is expected to be trimmed. No column-count check is made; a
/// line that merely contains a pipe and `---` is split the same way.
pub fn split_table_fragment(line: &str) -> TableFragment {
    let expanded = row_break_pattern().replace_all(line, "|\n|");

    let mut fragment = TableFragment::new();
    let mut state = ScanState::SeekingPipe;

    for sub_line in expanded.split('\n') {
        let row_text = if state == ScanState::SeekingPipe {
            state = ScanState::InRow;
            match extract_caption(sub_line) {
                Some((caption, rest)) => {
                    fragment.caption = Some(caption.to_string());
                    rest
                }
                None => sub_line,
            }
        } else {
            sub_line
        };

        let kind = if TableRow::is_separator_text(row_text) {
            state = ScanState::SeenSeparator;
            RowKind::Separator
        } else if state == ScanState::SeenSeparator {
            RowKind::Body
        } else {
            RowKind::Header
        };

        fragment.add_row(TableRow::new(row_text, kind));
    }

    log::debug!(
        "table fragment: {} rows, caption: {}",
        fragment.row_count(),
        fragment.caption.is_some()
    );

    fragment
}

/// Split `caption | cells...` at the first pipe.
///
/// Returns the trimmed caption and the remainder starting at the pipe, or
/// `None` when the sub-line already starts with a pipe (or has none).
fn extract_caption(sub_line: &str) -> Option<(&str, &str)> {
    if sub_line.trim().starts_with('|') {
        return None;
    }
    let pipe = sub_line.find('|')?;
    if pipe == 0 {
        return None;
    }
    Some((sub_line[..pipe].trim(), &sub_line[pipe..]))
}
