//! Markdown rendering of the preview section.

use super::types::FolderImages;

/// Render the preview block that replaces the README span.
///
/// `heading` is the start marker, so the rendered block can be located again
/// on the next run. Folders without images produce no output at all.
pub fn render_preview_section(heading: &str, folders: &[FolderImages]) -> String {
    let mut out = String::new();
    out.push_str(heading);
    out.push_str("\n\n");

    for folder in folders {
        if folder.images.is_empty() {
            continue;
        }
        out.push_str(&format!("#### {}\n\n", folder.label));
        for image in &folder.images {
            out.push_str(&format!("![{}]({})\n", image.name, image.link_target()));
        }
        out.push('\n');
    }

    out
}
