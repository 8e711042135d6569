//! Numbered heading types.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// `major.minor text`, digits ASCII only.
///
/// The text may not contain a line or paragraph separator (`\r`, U+2028,
/// U+2029); such a line is not a heading.
fn heading_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]+)\.([0-9]+)\s+([^\n\r\x{2028}\x{2029}]+)$").unwrap()
    })
}

/// Depth of a reconstructed numbered heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level numbered section (`N.0`), rendered as `##`
    Section,
    /// Numbered subsection (`N.M`), rendered as `###`
    Subsection,
}

impl HeadingLevel {
    /// Markdown heading depth (number of `#` characters).
    pub fn depth(self) -> usize {
        match self {
            HeadingLevel::Section => 2,
            HeadingLevel::Subsection => 3,
        }
    }

    /// The `#` run for this level.
    pub fn marker(self) -> &'static str {
        match self {
            HeadingLevel::Section => "##",
            HeadingLevel::Subsection => "###",
        }
    }
}

/// A line following the `major.minor text` numbering convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingMatch<'a> {
    /// Section number before the dot
    pub major: &'a str,
    /// Section number after the dot
    pub minor: &'a str,
    /// Heading text after the number
    pub title: &'a str,
}

impl<'a> HeadingMatch<'a> {
    /// Match a trimmed line against the numbering convention.
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = heading_pattern().captures(line)?;
        Some(Self {
            major: caps.get(1)?.as_str(),
            minor: caps.get(2)?.as_str(),
            title: caps.get(3)?.as_str(),
        })
    }

    /// `"0"` marks a top-level section. The comparison is textual, so `"00"`
    /// is a subsection.
    pub fn level(&self) -> HeadingLevel {
        if self.minor == "0" {
            HeadingLevel::Section
        } else {
            HeadingLevel::Subsection
        }
    }

    /// Render as a Markdown heading line.
    pub fn to_markdown(&self) -> String {
        format!(
            "{} {}.{} {}",
            self.level().marker(),
            self.major,
            self.minor,
            self.title
        )
    }
}
