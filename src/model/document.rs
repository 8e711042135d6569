//! Document-level types.

use super::Line;
use serde::Serialize;

/// A pasted document: an ordered sequence of lines.
///
/// Order is the only structure the repair engine relies on; there is no
/// lookup by anything other than position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Lines in input order
    pub lines: Vec<Line>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split text into lines on `\n`.
    ///
    /// A trailing `\r` is left in the raw line and removed by trimming, so
    /// CRLF input needs no special handling. Unlike [`str::lines`], a
    /// trailing newline yields a final empty line, which keeps the line count
    /// of the output identical to the input.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(Line::new).collect(),
        }
    }

    /// Add a line to the end of the document.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(Line::new(line));
    }

    /// Get the number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get a line by index (0-indexed).
    pub fn get_line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Check if the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the first line with content, if any.
    pub fn first_content_line(&self) -> Option<usize> {
        self.lines.iter().position(|l| !l.is_blank())
    }

    /// Iterate over lines in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
