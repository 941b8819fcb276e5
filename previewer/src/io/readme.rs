//! README read/patch/write.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::core::splice::splice_preview;
use crate::error::PreviewError;

/// Markers bounding the replaceable README span.
#[derive(Debug, Clone, Copy)]
pub struct Markers<'a> {
    pub start: &'a str,
    pub end: &'a str,
}

/// Result of patching the README.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeUpdate {
    /// False when the regenerated section matched what was already there.
    pub changed: bool,
}

/// Replace the marked span of the README at `path` with `section`.
///
/// The file is left untouched when it is missing or its markers are invalid.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn update_readme(path: &Path, markers: Markers<'_>, section: &str) -> Result<ReadmeUpdate> {
    if !path.is_file() {
        return Err(PreviewError::ReadmeMissing(path.to_path_buf()).into());
    }
    let content = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let patched = splice_preview(&content, markers.start, markers.end, section)?;
    let changed = patched != content;
    // In place: follows a symlinked README and keeps the file's mode.
    fs::write(path, &patched).with_context(|| format!("write {}", path.display()))?;
    debug!(changed, bytes = patched.len(), "readme written");
    Ok(ReadmeUpdate { changed })
}
