//! Markdown file export.
//!
//! Picks a file name from the report title and writes the repaired text to a
//! `.md` file. Where the file goes is decided by a [`SaveTarget`]; a target
//! may decline to save, which is not an error.

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// File stem used when the document has no title.
pub const FALLBACK_STEM: &str = "report_export";

/// Anything outside ASCII letters and digits.
fn unsafe_chars() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^A-Za-z0-9]").unwrap())
}

/// Text of the first top-level (`# `) heading, if any.
pub fn document_title(markdown: &str) -> Option<String> {
    markdown
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_string)
}

/// Suggest a file name for an exported report.
///
/// Every character that is not an ASCII letter or digit becomes `_` and
/// the result is lower-cased, e.g. `"Q3 Report: Sales"` gives
/// `q3_report__sales.md`.
pub fn suggest_filename(title: Option<&str>) -> String {
    let stem = title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| unsafe_chars().replace_all(t, "_").to_lowercase())
        .unwrap_or_else(|| FALLBACK_STEM.to_string());
    format!("{}.md", stem)
}

/// Outcome of an export attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The file was written to this path.
    Saved(PathBuf),
    /// The target declined to save (the user cancelled).
    Declined,
}

impl ExportOutcome {
    /// Check if a file was written.
    pub fn is_saved(&self) -> bool {
        matches!(self, ExportOutcome::Saved(_))
    }

    /// Get the written path, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ExportOutcome::Saved(path) => Some(path),
            ExportOutcome::Declined => None,
        }
    }
}

/// Decides where an exported file is written.
///
/// Returning `None` declines the save.
pub trait SaveTarget {
    /// Resolve the output path for a suggested file name.
    fn resolve(&self, suggested: &str) -> Option<PathBuf>;
}

/// Save into a directory under the suggested name.
#[derive(Debug, Clone)]
pub struct DirectoryTarget {
    dir: PathBuf,
    overwrite: bool,
}

impl DirectoryTarget {
    /// Save into `dir`, replacing existing files.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            overwrite: true,
        }
    }

    /// Decline instead of replacing an existing file.
    pub fn no_clobber(mut self) -> Self {
        self.overwrite = false;
        self
    }

    /// Get the target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SaveTarget for DirectoryTarget {
    fn resolve(&self, suggested: &str) -> Option<PathBuf> {
        let path = self.dir.join(suggested);
        if !self.overwrite && path.exists() {
            log::warn!("{} exists, not overwriting", path.display());
            return None;
        }
        Some(path)
    }
}

/// Save to a fixed path, ignoring the suggested name.
#[derive(Debug, Clone)]
pub struct FileTarget(pub PathBuf);

impl SaveTarget for FileTarget {
    fn resolve(&self, _suggested: &str) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

/// Write repaired Markdown through a save target.
pub fn save_markdown(
    content: &str,
    suggested: &str,
    target: &dyn SaveTarget,
) -> Result<ExportOutcome> {
    let Some(path) = target.resolve(suggested) else {
        log::info!("export of {} declined", suggested);
        return Ok(ExportOutcome::Declined);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| export_error(parent, e))?;
    }
    fs::write(&path, content).map_err(|e| export_error(&path, e))?;
    log::debug!("exported {} bytes to {}", content.len(), path.display());

    Ok(ExportOutcome::Saved(path))
}

/// Async variant of [`save_markdown`].
#[cfg(feature = "async")]
pub async fn save_markdown_async(
    content: &str,
    suggested: &str,
    target: &(dyn SaveTarget + Sync),
) -> Result<ExportOutcome> {
    let Some(path) = target.resolve(suggested) else {
        log::info!("export of {} declined", suggested);
        return Ok(ExportOutcome::Declined);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| export_error(parent, e))?;
    }
    tokio::fs::write(&path, content)
        .await
        .map_err(|e| export_error(&path, e))?;

    Ok(ExportOutcome::Saved(path))
}

fn export_error(path: &Path, err: std::io::Error) -> Error {
    Error::Export(format!("Failed to write {}: {}", path.display(), err))
}
