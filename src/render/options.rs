//! HTML rendering options.

/// Options for rendering repaired Markdown to HTML.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Wrap the body in a complete HTML document with print styles
    pub standalone: bool,

    /// Document title; taken from the first `#` heading when unset
    pub title: Option<String>,

    /// Open the print dialog once the page has loaded
    pub auto_print: bool,
}

impl HtmlOptions {
    /// Create new HTML options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a bare HTML fragment (no `<html>` wrapper).
    pub fn fragment() -> Self {
        Self {
            standalone: false,
            ..Self::default()
        }
    }

    /// Enable or disable the document wrapper.
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable the print-on-load script.
    pub fn with_auto_print(mut self, auto_print: bool) -> Self {
        self.auto_print = auto_print;
        self
    }
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            standalone: true,
            title: None,
            auto_print: false,
        }
    }
}
