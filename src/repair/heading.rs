//! Numbered heading reconstruction.

use crate::model::{HeadingLevel, HeadingMatch};

/// Rewrite a `major.minor text` line as a Markdown heading.
///
/// `N.0` becomes `##`, any other minor number `###`. Section numbers are not
/// checked for range or order. Returns `None` when the line does not follow
/// the convention.
pub fn reconstruct_heading(line: &str) -> Option<String> {
    reconstruct(line).map(|(_, text)| text)
}

/// Like [`reconstruct_heading`], also reporting the level chosen.
pub(crate) fn reconstruct(line: &str) -> Option<(HeadingLevel, String)> {
    let heading = HeadingMatch::parse(line)?;
    let level = heading.level();
    log::debug!(
        "heading {}.{} -> level {}",
        heading.major,
        heading.minor,
        level.depth()
    );
    Some((level, heading.to_markdown()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_heading() {
        assert_eq!(
            reconstruct_heading("1.0 Overview").as_deref(),
            Some("## 1.0 Overview")
        );
        assert_eq!(
            reconstruct_heading("10.0 Appendix A").as_deref(),
            Some("## 10.0 Appendix A")
        );
    }

    #[test]
    fn test_subsection_heading() {
        assert_eq!(
            reconstruct_heading("1.1 Details").as_deref(),
            Some("### 1.1 Details")
        );
        assert_eq!(
            reconstruct_heading("2.00 Zero padded").as_deref(),
            Some("### 2.00 Zero padded")
        );
    }

    #[test]
    fn test_out_of_order_numbers_accepted() {
        assert_eq!(
            reconstruct_heading("99.7 Anything").as_deref(),
            Some("### 99.7 Anything")
        );
    }

    #[test]
    fn test_non_heading() {
        assert_eq!(reconstruct_heading("Some text."), None);
        assert_eq!(reconstruct_heading("3.14"), None);
        assert_eq!(reconstruct_heading(""), None);
    }
}
