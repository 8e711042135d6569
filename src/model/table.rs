//! Table fragment types.

use serde::{Deserialize, Serialize};

/// A table recovered from a single collapsed input line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFragment {
    /// Free text that preceded the first pipe
    pub caption: Option<String>,

    /// Rows in output order
    pub rows: Vec<TableRow>,
}

impl TableFragment {
    /// Create a new empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the fragment.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the fragment has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check if any row is a separator row.
    pub fn has_separator(&self) -> bool {
        self.rows.iter().any(|r| r.kind == RowKind::Separator)
    }

    /// Get the rows above the first separator.
    pub fn header(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter(|r| r.kind == RowKind::Header)
    }

    /// Get the rows below the first separator.
    pub fn body(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter(|r| r.kind == RowKind::Body)
    }

    /// Render the fragment back to Markdown.
    ///
    /// The caption, when present, is its own paragraph: a blank line
    /// separates it from the first row so the header row is not glued to
    /// preceding text.
    pub fn to_markdown(&self) -> String {
        let rows = self
            .rows
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        match &self.caption {
            Some(caption) => format!("{}\n\n{}", caption, rows),
            None => rows,
        }
    }
}

/// Role of a row inside a table fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowKind {
    /// Row before the separator
    Header,
    /// Dash/colon alignment row
    Separator,
    /// Row after the separator
    Body,
}

/// A single reconstructed table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row text, normally beginning with `|`
    pub text: String,

    /// Role of the row
    pub kind: RowKind,
}

impl TableRow {
    /// Create a row.
    pub fn new(text: impl Into<String>, kind: RowKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Check if the row text looks like a separator row.
    pub fn is_separator_text(text: &str) -> bool {
        text.contains("---") || text.contains(":--")
    }

    /// Cell contents, with the outer pipes dropped.
    ///
    /// Column counts are not checked against other rows.
    pub fn cells(&self) -> Vec<&str> {
        let inner = self.text.trim();
        let inner = inner.strip_prefix('|').unwrap_or(inner);
        let inner = inner.strip_suffix('|').unwrap_or(inner);
        inner.split('|').map(str::trim).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TableFragment {
        TableFragment {
            caption: Some("Table 1: Results".to_string()),
            rows: vec![
                TableRow::new("| A | B |", RowKind::Header),
                TableRow::new("| :--- | :--- |", RowKind::Separator),
                TableRow::new("| 1 | 2", RowKind::Body),
            ],
        }
    }

    #[test]
    fn test_to_markdown_with_caption() {
        assert_eq!(
            sample().to_markdown(),
            "Table 1: Results\n\n| A | B |\n| :--- | :--- |\n| 1 | 2"
        );
    }

    #[test]
    fn test_to_markdown_without_caption() {
        let mut table = sample();
        table.caption = None;
        assert!(table.to_markdown().starts_with("| A | B |\n"));
    }

    #[test]
    fn test_header_and_body() {
        let table = sample();
        assert!(table.has_separator());
        assert_eq!(table.header().count(), 1);
        assert_eq!(table.body().count(), 1);
        assert_eq!(table.row_count(), 3);
    }

    #[test]
    fn test_cells() {
        let row = TableRow::new("| A | B |", RowKind::Header);
        assert_eq!(row.cells(), vec!["A", "B"]);

        let open = TableRow::new("| v1 | v2", RowKind::Body);
        assert_eq!(open.cells(), vec!["v1", "v2"]);
    }

    #[test]
    fn test_is_separator_text() {
        assert!(TableRow::is_separator_text("| --- | --- |"));
        assert!(TableRow::is_separator_text("|:--|"));
        assert!(!TableRow::is_separator_text("| a - b |"));
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"kind\":\"Separator\""));
        let back: TableFragment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
