//! Line type.

use serde::Serialize;

/// One physical line of input text.
///
/// Transforms only ever look at [`Line::trimmed`]; the raw form is kept so
/// callers can inspect what was discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    /// The line exactly as it appeared in the input (without the `\n`)
    raw: String,

    /// Offset of the trimmed content inside `raw`
    start: usize,

    /// Length of the trimmed content in bytes
    len: usize,
}

impl Line {
    /// Create a line from raw text.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let start = raw.len() - raw.trim_start_matches(is_trimmable).len();
        let len = trim_line(&raw).len();
        Self { raw, start, len }
    }

    /// The line exactly as it appeared in the input.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The line with leading and trailing whitespace removed.
    pub fn trimmed(&self) -> &str {
        &self.raw[self.start..self.start + self.len]
    }

    /// Check if the line has no content after trimming.
    pub fn is_blank(&self) -> bool {
        self.len == 0
    }

    /// Check if trimming changed the line.
    pub fn had_padding(&self) -> bool {
        self.len != self.raw.len()
    }
}

/// Trim a line the way pasted text needs it.
///
/// Besides Unicode whitespace this strips the byte-order mark, which
/// clipboard payloads from web pages frequently start with.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(is_trimmable)
}

fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_trimmed() {
        let line = Line::new("   1.0 Overview\t");
        assert_eq!(line.trimmed(), "1.0 Overview");
        assert_eq!(line.raw(), "   1.0 Overview\t");
        assert!(line.had_padding());
        assert!(!line.is_blank());
    }

    #[test]
    fn test_line_blank() {
        assert!(Line::new("").is_blank());
        assert!(Line::new(" \t \r").is_blank());
        assert!(!Line::new("x").had_padding());
    }

    #[test]
    fn test_trim_line_bom_and_nbsp() {
        assert_eq!(trim_line("\u{FEFF}Quarterly Report"), "Quarterly Report");
        assert_eq!(trim_line("\u{00A0}text\u{00A0}"), "text");
        assert_eq!(trim_line("row\r"), "row");
    }
}
