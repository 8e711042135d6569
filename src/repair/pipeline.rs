//! Single-pass repair driver.

use rayon::prelude::*;
use unicode_normalization::UnicodeNormalization;

use super::heading::reconstruct;
use super::{
    promote_title, split_table_fragment, LineClassifier, LineKind, RepairOptions, RepairResult,
    RepairStats, TitleState,
};
use crate::model::{Document, HeadingLevel, Line};

/// Repair pasted report text with default options.
///
/// Empty or absent input yields an empty string.
pub fn repair<'a>(input: impl Into<Option<&'a str>>) -> String {
    RepairPipeline::default().process(input.into().unwrap_or_default())
}

/// Repair pasted report text with custom options.
pub fn repair_with_options<'a>(
    input: impl Into<Option<&'a str>>,
    options: &RepairOptions,
) -> RepairResult {
    RepairPipeline::new(options.clone()).process_with_stats(input.into().unwrap_or_default())
}

/// Repair many independent documents in parallel.
///
/// Each document gets its own title state, so results are identical to
/// repairing them one by one.
pub fn repair_batch<S: AsRef<str> + Sync>(
    inputs: &[S],
    options: &RepairOptions,
) -> Vec<RepairResult> {
    let pipeline = RepairPipeline::new(options.clone());
    inputs
        .par_iter()
        .map(|input| pipeline.process_with_stats(input.as_ref()))
        .collect()
}

/// One repaired input line.
///
/// `text` may span several output lines when a table was split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairedLine {
    /// Category the input line was classified as
    pub kind: LineKind,
    /// Output text replacing the input line
    pub text: String,
}

/// Line-oriented repair pipeline.
///
/// Walks the input once, front to back. Each line is classified and then
/// handled by exactly one repair, in the order title, numbered heading,
/// table fragment; unmatched lines pass through trimmed.
#[derive(Debug, Clone)]
pub struct RepairPipeline {
    options: RepairOptions,
    classifier: LineClassifier,
}

impl RepairPipeline {
    /// Create a new pipeline with the given options.
    pub fn new(options: RepairOptions) -> Self {
        let classifier = LineClassifier::new(&options);
        Self {
            options,
            classifier,
        }
    }

    /// Get the pipeline options.
    pub fn options(&self) -> &RepairOptions {
        &self.options
    }

    /// Repair text and return the Markdown.
    pub fn process(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        join_lines(self.stream(text))
    }

    /// Repair text and return the Markdown with statistics.
    pub fn process_with_stats(&self, text: &str) -> RepairResult {
        if text.is_empty() {
            return RepairResult::default();
        }

        let mut stream = self.stream(text);
        let content = join_lines(&mut stream);
        let stats = if self.options.collect_stats {
            stream.stats()
        } else {
            RepairStats::default()
        };
        RepairResult::new(content, stats)
    }

    /// Repair text lazily, one input line at a time.
    pub fn stream(&self, text: &str) -> RepairStream {
        let document = if text.is_empty() {
            Document::new()
        } else if self.options.normalize_unicode {
            Document::from_text(&text.nfc().collect::<String>())
        } else {
            Document::from_text(text)
        };
        self.stream_document(document)
    }

    /// Repair an already split document lazily.
    pub fn stream_document(&self, document: Document) -> RepairStream {
        RepairStream {
            lines: document.lines.into_iter(),
            classifier: self.classifier,
            state: TitleState::Pending,
            stats: RepairStats::new(),
        }
    }
}

impl Default for RepairPipeline {
    fn default() -> Self {
        Self::new(RepairOptions::default())
    }
}

/// Iterator yielding repaired lines in input order.
///
/// Holds the only mutable state of a run: the title state and the running
/// statistics.
#[derive(Debug)]
pub struct RepairStream {
    lines: std::vec::IntoIter<Line>,
    classifier: LineClassifier,
    state: TitleState,
    stats: RepairStats,
}

impl RepairStream {
    /// Current title state.
    pub fn title_state(&self) -> TitleState {
        self.state
    }

    /// Statistics for the lines yielded so far.
    pub fn stats(&self) -> RepairStats {
        self.stats
    }

    fn repair_line(&mut self, line: &Line) -> RepairedLine {
        self.stats.record_line(line);

        let trimmed = line.trimmed();
        let kind = self.classifier.classify(trimmed, self.state);

        let text = match kind {
            LineKind::TitleCandidate => {
                let (text, next) = promote_title(trimmed, self.state);
                if text.len() != trimmed.len() {
                    log::debug!("promoted title: {}", trimmed);
                    self.stats.titles_promoted += 1;
                }
                self.state = next;
                text
            }
            LineKind::NumberedHeading => match reconstruct(trimmed) {
                Some((level, text)) => {
                    match level {
                        HeadingLevel::Section => self.stats.section_headings += 1,
                        HeadingLevel::Subsection => self.stats.subsection_headings += 1,
                    }
                    text
                }
                None => trimmed.to_string(),
            },
            LineKind::TableFragment => {
                let fragment = split_table_fragment(trimmed);
                self.stats.tables_split += 1;
                self.stats.table_rows += fragment.row_count() as u32;
                if fragment.caption.is_some() {
                    self.stats.captions_extracted += 1;
                }
                fragment.to_markdown()
            }
            LineKind::Plain => trimmed.to_string(),
        };

        RepairedLine { kind, text }
    }
}

impl Iterator for RepairStream {
    type Item = RepairedLine;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        Some(self.repair_line(&line))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.lines.size_hint()
    }
}

fn join_lines(lines: impl Iterator<Item = RepairedLine>) -> String {
    lines.map(|l| l.text).collect::<Vec<_>>().join("\n")
}
