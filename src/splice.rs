//! Marker-delimited README regions.
//!
//! Each category owns the lines between
//! `<!-- auto-generate-s:CATEGORY -->` and `<!-- auto-generate-e:CATEGORY -->`.
//! Both marker lines are kept so regeneration can run any number of times.

use crate::error::{DocError, Result};
use crate::model::{Category, DocRecord};
use crate::render;

/// Replace the lines between `start_marker` and `end_marker`.
///
/// Markers must match a whole line; the first occurrence of each is used.
/// Returns `None` when either marker is missing or the end marker comes
/// before the start marker.
pub fn replace(
    lines: &[String],
    start_marker: &str,
    end_marker: &str,
    replacements: &[String],
) -> Option<Vec<String>> {
    let start = lines.iter().position(|line| line == start_marker)?;
    let end = lines.iter().position(|line| line == end_marker)?;
    if end <= start {
        return None;
    }

    let mut out = Vec::with_capacity(start + 1 + replacements.len() + lines.len() - end);
    out.extend_from_slice(&lines[..=start]);
    out.extend_from_slice(replacements);
    out.extend_from_slice(&lines[end..]);
    Some(out)
}

/// Replace one category's region with the given fragments.
pub fn replace_region(
    lines: &[String],
    category: Category,
    fragments: &[String],
) -> Result<Vec<String>> {
    let start = category.start_marker();
    let end = category.end_marker();
    replace(lines, &start, &end, fragments).ok_or_else(|| {
        let marker = if lines.iter().any(|line| *line == start) {
            end
        } else {
            start
        };
        DocError::MarkerMissing { category, marker }
    })
}

/// Regenerate every category region of `readme` from sorted records.
///
/// Regions are rewritten one after another on the current text, so
/// non-overlapping marker pairs never clobber each other.
pub fn update_readme(readme: &str, docs: &[DocRecord]) -> Result<String> {
    let mut lines: Vec<String> = readme.split('\n').map(str::to_string).collect();

    for category in Category::SPLICE_ORDER {
        let fragments = render::render_category(docs, category);
        tracing::debug!("Splicing {} {} fragment(s)", fragments.len(), category);
        lines = replace_region(&lines, category, &fragments)?;
    }

    Ok(lines.join("\n"))
}
