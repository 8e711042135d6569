//! Error types for mdmend library.
//!
//! The repair engine itself never fails; these errors come from the layers
//! around it (reading input, exporting files, rendering HTML).

use std::io;
use thiserror::Error;

/// Result type alias for mdmend operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while acquiring, exporting or rendering text.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input bytes were not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// The source produced no content to repair.
    #[error("No content found: {0}")]
    EmptySource(String),

    /// Writing the exported Markdown file failed.
    #[error("Export error: {0}")]
    Export(String),

    /// Error during HTML rendering.
    #[error("Rendering error: {0}")]
    Render(String),

    /// No Markdown-to-HTML converter is compiled in.
    #[error("Markdown converter not available: rebuild with the `html` feature")]
    ConverterUnavailable,

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptySource("stdin".to_string());
        assert_eq!(err.to_string(), "No content found: stdin");

        let err = Error::ConverterUnavailable;
        assert!(err.to_string().contains("`html` feature"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_utf8_error_conversion() {
        let bytes = [0xC3, 0x28];
        let err: Error = std::str::from_utf8(&bytes).unwrap_err().into();
        assert!(matches!(err, Error::Encoding(_)));
    }
}
