//! Deterministic ordering and capping of collected images.

use std::cmp::Ordering;

use super::types::{ImageEntry, SortBy};

/// Sort `entries` by `sort_by` and drop everything beyond `cap`.
///
/// Ties fall back to the relative path so repeated runs render identically.
pub fn order_and_cap(entries: &mut Vec<ImageEntry>, sort_by: SortBy, cap: usize) {
    entries.sort_by(|a, b| compare(a, b, sort_by).then_with(|| a.rel_path.cmp(&b.rel_path)));
    entries.truncate(cap);
}

fn compare(a: &ImageEntry, b: &ImageEntry, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortBy::Modified => b.modified.cmp(&a.modified),
    }
}
