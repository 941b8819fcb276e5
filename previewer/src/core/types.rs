//! Shared deterministic types for the preview pipeline.
//!
//! These types carry no I/O handles; the scanner fills them in and the core
//! modules order and render them.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Ordering applied to the images of one folder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Lowercase file name, ascending.
    #[default]
    Name,
    /// Modification time, newest first.
    Modified,
}

/// One image file found under a configured folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageEntry {
    /// File name including extension (used as alt text).
    pub name: String,
    /// Path relative to the repository root, `/`-separated.
    pub rel_path: String,
    #[serde(skip)]
    pub modified: SystemTime,
}

impl ImageEntry {
    /// Markdown link target, always rooted with `./`.
    pub fn link_target(&self) -> String {
        format!("./{}", self.rel_path)
    }
}

/// Images collected for one labeled folder, already ordered and capped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderImages {
    pub dir: String,
    pub label: String,
    pub images: Vec<ImageEntry>,
}
