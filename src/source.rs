//! Acquiring the text to repair.
//!
//! Reads pasted report text from a file, standard input or raw bytes. All
//! failures here happen before the repair engine runs.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::trim_line;

/// Read report text from a file, or from stdin when `path` is `None` or `-`.
///
/// Fails with [`Error::EmptySource`] when the input holds only whitespace.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            let bytes = fs::read(p)?;
            decode_named(&bytes, &p.display().to_string())
        }
        _ => read_from(io::stdin().lock(), "stdin"),
    }
}

/// Read report text from any reader.
pub fn read_from<R: Read>(mut reader: R, name: &str) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode_named(&bytes, name)
}

/// Decode raw bytes as UTF-8 report text.
///
/// A leading byte-order mark is kept; line trimming removes it later.
pub fn decode_source(bytes: &[u8]) -> Result<String> {
    decode_named(bytes, "input")
}

fn decode_named(bytes: &[u8], name: &str) -> Result<String> {
    let text = std::str::from_utf8(bytes)?;
    if trim_line(text).is_empty() {
        return Err(Error::EmptySource(name.to_string()));
    }
    log::debug!("read {} bytes from {}", bytes.len(), name);
    Ok(text.to_string())
}
