//! Recursive image discovery under a configured folder.

use std::fs;
use std::path::{Component, Path};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use crate::core::ordering::order_and_cap;
use crate::core::types::{ImageEntry, SortBy};

/// Collection parameters shared by every folder.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Lowercase suffixes including the dot (e.g. `.png`).
    pub extensions: Vec<String>,
    pub cap: usize,
    pub sort_by: SortBy,
}

/// Collect images under `root/folder`, ordered and capped.
///
/// A folder that does not exist (or is not a directory) yields no images.
#[instrument(skip(root, opts), fields(cap = opts.cap, sort_by = ?opts.sort_by))]
pub fn collect_images(root: &Path, folder: &str, opts: &ScanOptions) -> Result<Vec<ImageEntry>> {
    let base = root.join(folder);
    if !base.is_dir() {
        debug!(path = %base.display(), "folder missing, skipping");
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(&base).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                // Unreadable subtrees are skipped; the rest of the folder still counts.
                warn!(path = ?err.path(), err = %err, "skipping unreadable entry");
                continue;
            }
        };
        let path = entry.path();
        if !has_image_extension(path, &opts.extensions) || !path.is_file() {
            continue;
        }
        entries.push(image_entry(root, path)?);
    }

    let found = entries.len();
    order_and_cap(&mut entries, opts.sort_by, opts.cap);
    if found > entries.len() {
        debug!(found, kept = entries.len(), "dropped images beyond cap");
    }
    Ok(entries)
}

fn has_image_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .is_some_and(|suffix| extensions.contains(&suffix))
}

fn image_entry(root: &Path, path: &Path) -> Result<ImageEntry> {
    let modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .with_context(|| format!("read modification time of {}", path.display()))?;
    let name = path
        .file_name()
        .ok_or_else(|| anyhow!("image path has no file name: {}", path.display()))?
        .to_string_lossy()
        .into_owned();
    let rel = path
        .strip_prefix(root)
        .with_context(|| format!("{} is outside {}", path.display(), root.display()))?;
    Ok(ImageEntry {
        name,
        rel_path: posix_path(rel),
        modified,
    })
}

/// Join path components with `/` regardless of platform.
pub fn posix_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
