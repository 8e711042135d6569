//! HTML rendering for repaired Markdown.
//!
//! Produces a print-ready page: the repaired report inside a print container
//! with a small stylesheet, optionally opening the print dialog on load.

use crate::error::{Error, Result};
use crate::export::document_title;

use super::HtmlOptions;

const FALLBACK_TITLE: &str = "Report";

const PRINT_STYLES: &str = "\
body { font-family: system-ui, sans-serif; line-height: 1.5; margin: 2rem; }
#print-container { max-width: 48rem; margin: 0 auto; }
table { border-collapse: collapse; margin: 1rem 0; }
th, td { border: 1px solid #999; padding: 0.25rem 0.5rem; text-align: left; }
@media print { body { margin: 0; } h1, h2, h3 { page-break-after: avoid; } table { page-break-inside: avoid; } }
";

/// Check if a Markdown-to-HTML converter is compiled in.
pub fn is_converter_available() -> bool {
    cfg!(feature = "html")
}

/// Render Markdown to HTML.
///
/// Fails with [`Error::ConverterUnavailable`] when the crate was built
/// without the `html` feature.
pub fn to_html(markdown: &str, options: &HtmlOptions) -> Result<String> {
    let body = convert(markdown)?;

    if !options.standalone {
        return Ok(body);
    }

    let title = options
        .title
        .clone()
        .or_else(|| document_title(markdown))
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());

    Ok(wrap_document(&body, &title, options.auto_print))
}

#[cfg(feature = "html")]
fn convert(markdown: &str) -> Result<String> {
    use pulldown_cmark::{html, Options, Parser};

    let mut parser_options = Options::empty();
    parser_options.insert(Options::ENABLE_TABLES);
    parser_options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, parser_options);
    let mut body = String::with_capacity(markdown.len() * 3 / 2);
    html::write_html_fmt(&mut body, parser).map_err(|e| Error::Render(e.to_string()))?;
    Ok(body)
}

#[cfg(not(feature = "html"))]
fn convert(_markdown: &str) -> Result<String> {
    log::warn!("HTML requested but no Markdown converter is compiled in");
    Err(Error::ConverterUnavailable)
}

fn wrap_document(body: &str, title: &str, auto_print: bool) -> String {
    let mut page = String::with_capacity(body.len() + PRINT_STYLES.len() + 256);
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<title>");
    page.push_str(&html_escape::encode_text(title));
    page.push_str("</title>\n<style>\n");
    page.push_str(PRINT_STYLES);
    page.push_str("</style>\n</head>\n<body>\n<div id=\"print-container\">\n");
    page.push_str(body);
    page.push_str("</div>\n");
    if auto_print {
        page.push_str(
            "<script>window.addEventListener(\"load\", () => setTimeout(() => window.print(), 100));</script>\n",
        );
    }
    page.push_str("</body>\n</html>\n");
    page
}

#[cfg(all(test, feature = "html"))]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_table() {
        let markdown = "Caption\n\n| A | B |\n| :--- | :--- |\n| 1 | 2 |";
        let html = to_html(markdown, &HtmlOptions::fragment()).unwrap();
        assert!(html.contains("<p>Caption</p>"));
        assert!(html.contains("<table>"));
        assert!(html.contains("<th style=\"text-align: left\">A</th>"));
        assert!(html.contains("<td style=\"text-align: left\">2</td>"));
        assert!(!html.contains("<html>"));
    }

    #[test]
    fn test_standalone_title_from_heading() {
        let html = to_html("# Q3 <Review>\n\ntext", &HtmlOptions::default()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Q3 &lt;Review&gt;</title>"));
        assert!(html.contains("<div id=\"print-container\">"));
        assert!(!html.contains("window.print"));
    }

    #[test]
    fn test_explicit_title_and_auto_print() {
        let options = HtmlOptions::new().with_title("Custom").with_auto_print(true);
        let html = to_html("no heading here", &options).unwrap();
        assert!(html.contains("<title>Custom</title>"));
        assert!(html.contains("window.print()"));
    }

    #[test]
    fn test_fallback_title() {
        let html = to_html("plain", &HtmlOptions::default()).unwrap();
        assert!(html.contains("<title>Report</title>"));
    }

    #[test]
    fn test_converter_available() {
        assert!(is_converter_available());
    }
}
