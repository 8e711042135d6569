//! Title promotion.

use serde::{Deserialize, Serialize};

/// Whether the document title has been seen yet in the current run.
///
/// Threaded through the pass by value: each step takes the state and
/// returns the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TitleState {
    /// No non-empty line processed yet
    #[default]
    Pending,
    /// The first non-empty line has been handled
    Found,
}

impl TitleState {
    /// Check if the title slot is still open.
    pub fn is_pending(self) -> bool {
        matches!(self, TitleState::Pending)
    }
}

/// Promote a trimmed line to the document title.
///
/// Only acts while the state is pending and the line has content. A line
/// that already starts with `#` is kept as-is but still closes the slot.
/// Returns the (possibly rewritten) line and the next state.
pub fn promote_title(line: &str, state: TitleState) -> (String, TitleState) {
    if !state.is_pending() || line.is_empty() {
        return (line.to_string(), state);
    }

    if line.starts_with('#') {
        (line.to_string(), TitleState::Found)
    } else {
        (format!("# {}", line), TitleState::Found)
    }
}
