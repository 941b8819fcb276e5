//! Previewer configuration stored in `previewer.toml` at the repository root.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::types::SortBy;

/// Default config file name, relative to the repository root.
pub const CONFIG_FILE: &str = "previewer.toml";

/// Previewer configuration (TOML).
///
/// Every field is optional; a missing file or field falls back to the values
/// the tool has always used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    /// README path relative to the repository root.
    pub readme: String,

    /// Heading that opens the replaceable span (also the generated heading).
    pub start_marker: String,

    /// Heading that closes the replaceable span; kept verbatim.
    pub end_marker: String,

    /// Maximum number of images listed per folder.
    pub max_images_per_section: usize,

    pub sort_by: SortBy,

    /// Recognized image suffixes, including the leading dot.
    pub extensions: Vec<String>,

    /// Folders to scan, in rendering order.
    pub folders: Vec<FolderConfig>,

    pub git: GitConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FolderConfig {
    /// Directory relative to the repository root.
    pub dir: String,
    /// Subheading shown above the folder's images.
    pub label: String,
}

impl FolderConfig {
    fn new(dir: &str, label: &str) -> Self {
        Self {
            dir: dir.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    pub commit_message: String,

    /// Kill a git command that runs longer than this. Unset waits forever.
    pub command_timeout_secs: Option<u64>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            commit_message: "up".to_string(),
            command_timeout_secs: None,
        }
    }
}

impl GitConfig {
    pub fn command_timeout(&self) -> Option<Duration> {
        self.command_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            readme: "README.md".to_string(),
            start_marker: "### Preview".to_string(),
            end_marker: "### Source".to_string(),
            max_images_per_section: 20,
            sort_by: SortBy::Name,
            extensions: [".jpg", ".jpeg", ".png", ".webp"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            folders: vec![
                FolderConfig::new("Horizontal", "Wide"),
                FolderConfig::new("Vertical", "Potrait"),
            ],
            git: GitConfig::default(),
        }
    }
}

impl PreviewConfig {
    pub fn validate(&self) -> Result<()> {
        if self.readme.trim().is_empty() {
            return Err(anyhow!("readme must be a non-empty path"));
        }
        if self.start_marker.is_empty() || self.end_marker.is_empty() {
            return Err(anyhow!("start_marker and end_marker must be non-empty"));
        }
        if self.start_marker == self.end_marker {
            return Err(anyhow!("start_marker and end_marker must differ"));
        }
        if self.max_images_per_section == 0 {
            return Err(anyhow!("max_images_per_section must be > 0"));
        }
        if self.extensions.is_empty() {
            return Err(anyhow!("extensions must be a non-empty array"));
        }
        if let Some(bad) = self
            .extensions
            .iter()
            .find(|ext| !ext.starts_with('.') || ext.len() < 2)
        {
            return Err(anyhow!("extension '{bad}' must look like '.png'"));
        }
        if self.folders.is_empty() {
            return Err(anyhow!("folders must be a non-empty array"));
        }
        for folder in &self.folders {
            if folder.dir.trim().is_empty() || folder.label.trim().is_empty() {
                return Err(anyhow!("every folder needs a non-empty dir and label"));
            }
        }
        if self.git.commit_message.trim().is_empty() {
            return Err(anyhow!("git.commit_message must be non-empty"));
        }
        if self.git.command_timeout_secs == Some(0) {
            return Err(anyhow!("git.command_timeout_secs must be > 0"));
        }
        Ok(())
    }

    /// Lowercased extensions for suffix comparison.
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.extensions.iter().map(|ext| ext.to_lowercase()).collect()
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `PreviewConfig::default()`.
pub fn load_config(path: &Path) -> Result<PreviewConfig> {
    if !path.exists() {
        let cfg = PreviewConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PreviewConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
