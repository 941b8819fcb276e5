//! Marker-bounded replacement of README text.

use crate::error::{MarkerProblem, PreviewError};

/// Replace the text from `start` up to (not including) `end` with `section`.
///
/// Both markers are located by their first occurrence. Everything before the
/// start marker and from the end marker onward is kept byte-for-byte.
pub fn splice_preview(
    content: &str,
    start: &str,
    end: &str,
    section: &str,
) -> Result<String, PreviewError> {
    let (start_at, end_at) = locate_markers(content, start, end)?;
    let mut out = String::with_capacity(content.len() - (end_at - start_at) + section.len());
    out.push_str(&content[..start_at]);
    out.push_str(section);
    out.push_str(&content[end_at..]);
    Ok(out)
}

/// Byte offsets of both markers, validated to be in order.
pub fn locate_markers(content: &str, start: &str, end: &str) -> Result<(usize, usize), PreviewError> {
    let malformed = |problem| PreviewError::MalformedReadme {
        start: start.to_string(),
        end: end.to_string(),
        problem,
    };
    let start_at = content
        .find(start)
        .ok_or_else(|| malformed(MarkerProblem::StartMissing))?;
    let end_at = content
        .find(end)
        .ok_or_else(|| malformed(MarkerProblem::EndMissing))?;
    if start_at >= end_at {
        return Err(malformed(MarkerProblem::OutOfOrder));
    }
    Ok((start_at, end_at))
}
