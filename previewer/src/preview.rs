//! Orchestration for `previewer preview`, `list` and `update`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::core::section::render_preview_section;
use crate::core::types::FolderImages;
use crate::io::config::PreviewConfig;
use crate::io::readme::{Markers, ReadmeUpdate, update_readme};
use crate::io::scan::{ScanOptions, collect_images};

/// Collect every configured folder, in configured order.
///
/// Folders without images are kept (with an empty list) so callers can report
/// them; rendering drops them.
pub fn collect_folders(root: &Path, cfg: &PreviewConfig) -> Result<Vec<FolderImages>> {
    let opts = ScanOptions {
        extensions: cfg.normalized_extensions(),
        cap: cfg.max_images_per_section,
        sort_by: cfg.sort_by,
    };
    cfg.folders
        .iter()
        .map(|folder| -> Result<FolderImages> {
            let images = collect_images(root, &folder.dir, &opts)
                .with_context(|| format!("collect images in {}", folder.dir))?;
            debug!(dir = %folder.dir, count = images.len(), "collected folder");
            Ok(FolderImages {
                dir: folder.dir.clone(),
                label: folder.label.clone(),
                images,
            })
        })
        .collect()
}

/// Render the preview section for the repository at `root`.
pub fn build_section(root: &Path, cfg: &PreviewConfig) -> Result<String> {
    let folders = collect_folders(root, cfg)?;
    Ok(render_preview_section(&cfg.start_marker, &folders))
}

/// Absolute README path for the repository at `root`.
pub fn readme_path(root: &Path, cfg: &PreviewConfig) -> PathBuf {
    root.join(&cfg.readme)
}

/// Regenerate the preview section and write it into the README.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn update_from_root(root: &Path, cfg: &PreviewConfig) -> Result<ReadmeUpdate> {
    let section = build_section(root, cfg)?;
    let markers = Markers {
        start: &cfg.start_marker,
        end: &cfg.end_marker,
    };
    update_readme(&readme_path(root, cfg), markers, &section)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::core::types::SortBy;
    use crate::error::PreviewError;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(path, b"img").expect("write");
    }

    #[test]
    fn wide_only_example_section() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch(temp.path(), "Horizontal/b.png");
        touch(temp.path(), "Horizontal/a.jpg");
        fs::create_dir_all(temp.path().join("Vertical")).expect("mkdir");

        let section = build_section(temp.path(), &PreviewConfig::default()).expect("build");
        assert_eq!(
            section,
            "### Preview\n\n#### Wide\n\n![a.jpg](./Horizontal/a.jpg)\n![b.png](./Horizontal/b.png)\n\n"
        );
    }

    #[test]
    fn both_folders_render_in_config_order() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch(temp.path(), "Vertical/p.webp");
        touch(temp.path(), "Horizontal/w.png");

        let section = build_section(temp.path(), &PreviewConfig::default()).expect("build");
        assert_eq!(
            section,
            "### Preview\n\n#### Wide\n\n![w.png](./Horizontal/w.png)\n\n#### Potrait\n\n![p.webp](./Vertical/p.webp)\n\n"
        );
    }

    #[test]
    fn collect_keeps_empty_folders_for_reporting() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch(temp.path(), "Horizontal/a.png");
        let folders = collect_folders(temp.path(), &PreviewConfig::default()).expect("collect");
        assert_eq!(folders.len(), 2);
        assert_eq!(folders[0].images.len(), 1);
        assert!(folders[1].images.is_empty());
    }

    #[test]
    fn cap_applies_per_folder() {
        let temp = tempfile::tempdir().expect("tempdir");
        for i in 0..4 {
            touch(temp.path(), &format!("Horizontal/h{i}.png"));
            touch(temp.path(), &format!("Vertical/v{i}.png"));
        }
        let cfg = PreviewConfig {
            max_images_per_section: 3,
            sort_by: SortBy::Name,
            ..PreviewConfig::default()
        };
        let folders = collect_folders(temp.path(), &cfg).expect("collect");
        assert!(folders.iter().all(|f| f.images.len() == 3));
    }

    #[test]
    fn update_writes_readme_between_markers() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch(temp.path(), "Horizontal/a.jpg");
        fs::write(
            temp.path().join("README.md"),
            "# Wallpapers\n\n### Preview\n\nold\n\n### Source\n\nCredits.\n",
        )
        .expect("write readme");

        let update = update_from_root(temp.path(), &PreviewConfig::default()).expect("update");
        assert!(update.changed);
        assert_eq!(
            fs::read_to_string(temp.path().join("README.md")).expect("read"),
            "# Wallpapers\n\n### Preview\n\n#### Wide\n\n![a.jpg](./Horizontal/a.jpg)\n\n### Source\n\nCredits.\n"
        );
    }

    #[test]
    fn update_without_readme_fails() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = update_from_root(temp.path(), &PreviewConfig::default())
            .expect_err("should fail");
        assert!(matches!(
            err.downcast_ref::<PreviewError>(),
            Some(PreviewError::ReadmeMissing(_))
        ));
    }
}
