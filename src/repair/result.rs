//! Repair result with statistics.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::Line;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Result of repairing a document, including content and statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairResult {
    /// The repaired Markdown
    pub content: String,

    /// Repair statistics (all zero unless collection was enabled)
    pub stats: RepairStats,
}

impl RepairResult {
    /// Create a new repair result.
    pub fn new(content: String, stats: RepairStats) -> Self {
        Self { content, stats }
    }

    /// Create a simple result with just content.
    pub fn content_only(content: String) -> Self {
        Self {
            content,
            stats: RepairStats::default(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// Serialize the content and statistics to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let result = match format {
            JsonFormat::Pretty => serde_json::to_string_pretty(self),
            JsonFormat::Compact => serde_json::to_string(self),
        };

        result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
    }

    /// Parse a result previously written with [`RepairResult::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Other(format!("JSON parse error: {}", e)))
    }
}

/// Statistics collected during a repair run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairStats {
    /// Input lines processed
    pub line_count: u32,

    /// Lines that were empty after trimming
    pub blank_lines: u32,

    /// First lines that received a `#` marker (at most one per document)
    pub titles_promoted: u32,

    /// `N.0` lines turned into `##` headings
    pub section_headings: u32,

    /// `N.M` lines turned into `###` headings
    pub subsection_headings: u32,

    /// Collapsed table lines that were split
    pub tables_split: u32,

    /// Captions moved out of table lines
    pub captions_extracted: u32,

    /// Table rows emitted by the splitter
    pub table_rows: u32,

    /// Lines whose leading or trailing whitespace was dropped
    pub lines_trimmed: u32,
}

impl RepairStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of lines rewritten by a repair.
    pub fn repaired_lines(&self) -> u32 {
        self.titles_promoted
            + self.section_headings
            + self.subsection_headings
            + self.tables_split
    }

    /// Count an input line before it is repaired.
    pub(crate) fn record_line(&mut self, line: &Line) {
        self.line_count += 1;
        if line.is_blank() {
            self.blank_lines += 1;
        }
        if line.had_padding() {
            self.lines_trimmed += 1;
        }
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &RepairStats) {
        self.line_count += other.line_count;
        self.blank_lines += other.blank_lines;
        self.titles_promoted += other.titles_promoted;
        self.section_headings += other.section_headings;
        self.subsection_headings += other.subsection_headings;
        self.tables_split += other.tables_split;
        self.captions_extracted += other.captions_extracted;
        self.table_rows += other.table_rows;
        self.lines_trimmed += other.lines_trimmed;
    }
}
