//! # mdmend
//!
//! Structural repair for report text pasted out of a web document
//! generator.
//!
//! Copying a report "with formatting" from such tools loses most of the
//! Markdown structure: the title is a plain line, numbered sections like
//! `1.0 Overview` are not headings, and tables arrive collapsed onto a single
//! line together with their caption. This library puts that structure back.
//!
//! ## Quick Start
//!
//! ```
//! let pasted = "Quarterly Report\n1.0 Overview\nTable 1: Results | A | B | | :--- | :--- |";
//! let markdown = mdmend::repair(pasted);
//!
//! assert_eq!(
//!     markdown,
//!     "# Quarterly Report\n## 1.0 Overview\nTable 1: Results\n\n| A | B |\n| :--- | :--- |"
//! );
//! ```
//!
//! ## Features
//!
//! - **Title promotion**: first non-empty line becomes the `#` title
//! - **Numbered headings**: `N.0` -> `##`, `N.M` -> `###`
//! - **Table splitting**: caption, header and separator rows put on their own lines
//! - **Export**: file name suggestion and `.md` saving
//! - **HTML**: printable HTML via `pulldown-cmark` (`html` feature)
//! - **Parallel batches**: uses Rayon for many documents

pub mod error;
pub mod export;
pub mod model;
pub mod render;
pub mod repair;
pub mod source;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{
    document_title, save_markdown, suggest_filename, DirectoryTarget, ExportOutcome, FileTarget,
    SaveTarget,
};
pub use model::{
    Document, HeadingLevel, HeadingMatch, Line, RowKind, TableFragment, TableRow,
};
pub use render::{to_html, HtmlOptions};
pub use repair::{
    repair, repair_batch, repair_with_options, JsonFormat, LineKind, RepairOptions,
    RepairPipeline, RepairResult, RepairStats, TitleState,
};
pub use source::{decode_source, read_source};

use std::path::Path;

/// Repair a text file.
///
/// # Example
///
/// ```no_run
/// let markdown = mdmend::repair_file("pasted.txt").unwrap();
/// std::fs::write("report.md", markdown).unwrap();
/// ```
pub fn repair_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let text = read_source(Some(path.as_ref()))?;
    Ok(repair(text.as_str()))
}

/// Repair text and render it straight to a printable HTML page.
///
/// # Example
///
/// ```no_run
/// use mdmend::{repair_to_html, HtmlOptions};
///
/// let html = repair_to_html("Report\n1.0 Intro", &HtmlOptions::default()).unwrap();
/// std::fs::write("report.html", html).unwrap();
/// ```
pub fn repair_to_html(text: &str, options: &HtmlOptions) -> Result<String> {
    to_html(&repair(text), options)
}

/// Builder for repairing and exporting pasted reports.
///
/// # Example
///
/// ```
/// use mdmend::Mdmend;
///
/// let repaired = Mdmend::new()
///     .without_tables()
///     .with_stats()
///     .repair("Report\n1.1 Scope");
///
/// assert_eq!(repaired.to_markdown(), "# Report\n### 1.1 Scope");
/// assert_eq!(repaired.stats().subsection_headings, 1);
/// ```
pub struct Mdmend {
    repair_options: RepairOptions,
    html_options: HtmlOptions,
}

impl Mdmend {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            repair_options: RepairOptions::default(),
            html_options: HtmlOptions::default(),
        }
    }

    /// Leave the first line as it is.
    pub fn without_title(mut self) -> Self {
        self.repair_options = self.repair_options.with_title(false);
        self
    }

    /// Leave `N.M text` lines as they are.
    pub fn without_headings(mut self) -> Self {
        self.repair_options = self.repair_options.with_headings(false);
        self
    }

    /// Leave collapsed table lines as they are.
    pub fn without_tables(mut self) -> Self {
        self.repair_options = self.repair_options.with_tables(false);
        self
    }

    /// Normalize input to Unicode NFC first.
    pub fn with_unicode_normalization(mut self) -> Self {
        self.repair_options = self.repair_options.with_unicode_normalization(true);
        self
    }

    /// Collect repair statistics.
    pub fn with_stats(mut self) -> Self {
        self.repair_options = self.repair_options.with_stats(true);
        self
    }

    /// Set HTML rendering options.
    pub fn with_html_options(mut self, options: HtmlOptions) -> Self {
        self.html_options = options;
        self
    }

    /// Repair pasted text.
    pub fn repair<'a>(self, text: impl Into<Option<&'a str>>) -> Repaired {
        let result = repair_with_options(text, &self.repair_options);
        Repaired {
            result,
            html_options: self.html_options,
        }
    }

    /// Read and repair a file (`-` for stdin).
    pub fn repair_file<P: AsRef<Path>>(self, path: P) -> Result<Repaired> {
        let text = read_source(Some(path.as_ref()))?;
        Ok(self.repair(text.as_str()))
    }
}

impl Default for Mdmend {
    fn default() -> Self {
        Self::new()
    }
}

/// A repaired report, ready to export or render.
pub struct Repaired {
    result: RepairResult,
    html_options: HtmlOptions,
}

impl Repaired {
    /// Get the repaired Markdown.
    pub fn to_markdown(&self) -> &str {
        &self.result.content
    }

    /// Render to HTML.
    pub fn to_html(&self) -> Result<String> {
        to_html(&self.result.content, &self.html_options)
    }

    /// Repair statistics (zero unless enabled on the builder).
    pub fn stats(&self) -> RepairStats {
        self.result.stats
    }

    /// Title of the repaired document, if it has one.
    pub fn title(&self) -> Option<String> {
        document_title(&self.result.content)
    }

    /// File name suggested for exporting this report.
    pub fn suggested_filename(&self) -> String {
        suggest_filename(self.title().as_deref())
    }

    /// Save the Markdown through a save target.
    pub fn export(&self, target: &dyn SaveTarget) -> Result<ExportOutcome> {
        save_markdown(&self.result.content, &self.suggested_filename(), target)
    }

    /// Consume into the underlying result.
    pub fn into_result(self) -> RepairResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = Mdmend::default();
        assert!(builder.repair_options.promote_title);
        assert!(builder.repair_options.split_tables);
        assert!(!builder.repair_options.collect_stats);
        assert!(builder.html_options.standalone);
    }

    #[test]
    fn test_builder_chained() {
        let builder = Mdmend::new()
            .without_title()
            .without_headings()
            .with_unicode_normalization()
            .with_stats()
            .with_html_options(HtmlOptions::fragment());

        assert!(!builder.repair_options.promote_title);
        assert!(!builder.repair_options.reconstruct_headings);
        assert!(builder.repair_options.split_tables);
        assert!(builder.repair_options.normalize_unicode);
        assert!(builder.repair_options.collect_stats);
        assert!(!builder.html_options.standalone);
    }

    #[test]
    fn test_repaired_title_and_filename() {
        let repaired = Mdmend::new().repair("Quarterly Report\n1.0 Overview");
        assert_eq!(repaired.title().as_deref(), Some("Quarterly Report"));
        assert_eq!(repaired.suggested_filename(), "quarterly_report.md");
    }

    #[test]
    fn test_repaired_without_title_uses_fallback_name() {
        let repaired = Mdmend::new().without_title().repair("Quarterly Report");
        assert_eq!(repaired.to_markdown(), "Quarterly Report");
        assert_eq!(repaired.suggested_filename(), "report_export.md");
    }

    #[test]
    fn test_repaired_absent_input() {
        let repaired = Mdmend::new().repair(None);
        assert_eq!(repaired.to_markdown(), "");
        assert_eq!(repaired.into_result(), RepairResult::default());
    }

    #[test]
    fn test_repair_file_missing() {
        assert!(matches!(
            repair_file("/nonexistent/pasted.txt"),
            Err(Error::Io(_))
        ));
    }

    #[cfg(feature = "html")]
    #[test]
    fn test_repair_to_html() {
        let html = repair_to_html(
            "Report\nT | A | | --- |",
            &HtmlOptions::fragment(),
        )
        .unwrap();
        assert!(html.contains("<h1>Report</h1>"));
        assert!(html.contains("<p>T</p>"));
        assert!(html.contains("<table>"));
    }
}
