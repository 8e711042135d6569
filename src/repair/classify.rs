//! Line classification.

use serde::{Deserialize, Serialize};

use super::{RepairOptions, TitleState};
use crate::model::{HeadingMatch, TableRow};

/// Category of a trimmed input line, deciding which repair applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// First non-empty line while the title slot is open
    TitleCandidate,
    /// `major.minor text` section line
    NumberedHeading,
    /// Collapsed caption/header/separator line
    TableFragment,
    /// Anything else, passed through unchanged
    Plain,
}

/// Check if a line looks like a collapsed table: a pipe plus a separator
/// marker anywhere in the line.
pub fn is_table_fragment(line: &str) -> bool {
    line.contains('|') && TableRow::is_separator_text(line)
}

/// Classify a trimmed line with every repair enabled.
pub fn classify(line: &str, state: TitleState) -> LineKind {
    LineClassifier::default().classify(line, state)
}

/// Classifier honouring the enabled repairs.
///
/// A disabled repair's category is skipped, so the next category in
/// precedence order applies instead.
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier {
    titles: bool,
    headings: bool,
    tables: bool,
}

impl LineClassifier {
    /// Create a classifier for the given options.
    pub fn new(options: &RepairOptions) -> Self {
        Self {
            titles: options.promote_title,
            headings: options.reconstruct_headings,
            tables: options.split_tables,
        }
    }

    /// Classify a trimmed line.
    ///
    /// Precedence: title candidate, numbered heading, table fragment, plain.
    pub fn classify(&self, line: &str, state: TitleState) -> LineKind {
        if self.titles && state.is_pending() && !line.is_empty() {
            LineKind::TitleCandidate
        } else if self.headings && HeadingMatch::parse(line).is_some() {
            LineKind::NumberedHeading
        } else if self.tables && is_table_fragment(line) {
            LineKind::TableFragment
        } else {
            LineKind::Plain
        }
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(&RepairOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_candidate_takes_precedence() {
        assert_eq!(
            classify("1.0 Overview", TitleState::Pending),
            LineKind::TitleCandidate
        );
        assert_eq!(
            classify("A | B | | --- | --- |", TitleState::Pending),
            LineKind::TitleCandidate
        );
    }

    #[test]
    fn test_empty_line_is_plain_before_title() {
        assert_eq!(classify("", TitleState::Pending), LineKind::Plain);
    }

    #[test]
    fn test_heading_and_table() {
        assert_eq!(
            classify("2.1 Scope", TitleState::Found),
            LineKind::NumberedHeading
        );
        assert_eq!(
            classify("Caption | A | | :--- |", TitleState::Found),
            LineKind::TableFragment
        );
        assert_eq!(classify("| A | B |", TitleState::Found), LineKind::Plain);
        assert_eq!(classify("a --- b", TitleState::Found), LineKind::Plain);
        assert_eq!(classify("Some text.", TitleState::Found), LineKind::Plain);
    }

    #[test]
    fn test_disabled_title_falls_through() {
        let classifier = LineClassifier::new(&RepairOptions::new().with_title(false));
        assert_eq!(
            classifier.classify("1.0 Overview", TitleState::Pending),
            LineKind::NumberedHeading
        );
    }

    #[test]
    fn test_disabled_tables_are_plain() {
        let classifier = LineClassifier::new(&RepairOptions::new().with_tables(false));
        assert_eq!(
            classifier.classify("Caption | A | | :--- |", TitleState::Found),
            LineKind::Plain
        );
    }

    #[test]
    fn test_is_table_fragment() {
        assert!(is_table_fragment("| --- |"));
        assert!(is_table_fragment("x |:--"));
        assert!(!is_table_fragment("---"));
        assert!(!is_table_fragment("a | b"));
    }

    #[test]
    fn test_kind_serde_round_trip() {
        for kind in [
            LineKind::TitleCandidate,
            LineKind::NumberedHeading,
            LineKind::TableFragment,
            LineKind::Plain,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(serde_json::from_str::<LineKind>(&json).unwrap(), kind);
        }
    }
}
