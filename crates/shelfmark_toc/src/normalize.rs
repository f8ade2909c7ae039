//! Outline consistency normalization.
//!
//! Generated outlines are often detailed for some chapters and flat for
//! others, which means the detail is unreliable. When depth coverage across
//! siblings falls below [`CONSISTENCY_THRESHOLD`], the deeper level is
//! removed entirely.
//!
//! Two checks run in order:
//!
//! 1. **Chapter depth.** The share of chapters with any deeper node. Back
//!    matter (appendix, index and the like) is left out of the count.
//!    Inconsistent coverage keeps only level-1 nodes.
//! 2. **Section depth.** The share of level-2 sections with a level-3 node.
//!    Inconsistent coverage drops every node at level 3 or deeper. Back
//!    matter is not exempt here.

use shelfmark_core::{Outline, OutlineNode};
use tracing::{debug, info, instrument, warn};

/// Coverage below this (and above zero) counts as inconsistent.
pub const CONSISTENCY_THRESHOLD: f64 = 0.8;

/// Case-insensitive substrings marking back-matter chapters.
pub const BACKMATTER_PATTERNS: [&str; 7] = [
    "appendix",
    "index",
    "bibliography",
    "reference",
    "索引",
    "付録",
    "参考文献",
];

/// Enough passes for a removal in one check to settle the other.
const MAX_PASSES: usize = 3;

/// Whether a chapter title names back matter excluded from the chapter check.
///
/// # Examples
///
/// ```
/// use shelfmark_toc::is_ignored_section;
///
/// assert!(is_ignored_section("Appendix A: Grammar"));
/// assert!(is_ignored_section("参考文献"));
/// assert!(!is_ignored_section("Chapter 1: Ownership"));
/// ```
pub fn is_ignored_section(title: &str) -> bool {
    let lowered = title.to_lowercase();
    BACKMATTER_PATTERNS
        .iter()
        .any(|pattern| lowered.contains(pattern))
}

/// Whether `ratio` signals partial, unreliable depth coverage.
fn is_inconsistent(ratio: f64) -> bool {
    ratio > 0.0 && ratio < CONSISTENCY_THRESHOLD
}

/// Normalize an outline.
///
/// Runs the chapter check then the section check, repeating until a pass
/// removes nothing, so the result is a fixed point: normalizing it again
/// changes nothing.
///
/// # Examples
///
/// ```
/// use shelfmark_core::{Outline, OutlineNode};
/// use shelfmark_toc::normalize;
///
/// let outline: Outline = [("Ch1", 1), ("1.1", 2), ("Ch2", 1), ("Ch3", 1)]
///     .into_iter()
///     .map(|(t, l)| OutlineNode::new(t, l).unwrap())
///     .collect();
///
/// // 1 of 3 chapters has sections: flatten.
/// let normalized = normalize(outline);
/// assert_eq!(normalized.len(), 3);
/// assert!(normalized.iter().all(OutlineNode::is_chapter));
/// ```
#[instrument(skip_all, fields(input_nodes = outline.len()))]
pub fn normalize(outline: Outline) -> Outline {
    if outline.is_empty() {
        return outline;
    }

    let mut current = outline;
    for pass in 1..=MAX_PASSES {
        let before = current.len();
        current = check_section_depth(check_chapter_depth(current));
        if current.len() == before {
            break;
        }
        debug!(pass, removed = before - current.len(), "Normalization pass removed nodes");
    }

    info!(output_nodes = current.len(), "Normalized outline");
    current
}

/// Chapter-depth check: keep only chapters when few of them have children.
pub fn check_chapter_depth(outline: Outline) -> Outline {
    let chapters = outline.positions_at(OutlineNode::CHAPTER);
    if chapters.is_empty() {
        return outline;
    }

    let nodes = outline.nodes();
    let mut valid = 0usize;
    let mut detailed = 0usize;

    for (i, &start) in chapters.iter().enumerate() {
        let title = nodes[start].title();
        if is_ignored_section(title) {
            debug!(title, "Ignoring back-matter chapter");
            continue;
        }
        valid += 1;

        let end = chapters.get(i + 1).copied().unwrap_or(nodes.len());
        if nodes[start + 1..end]
            .iter()
            .any(|n| n.level() > OutlineNode::CHAPTER)
        {
            detailed += 1;
            debug!(title, first = start + 1, last = end - 1, "Chapter has children");
        } else {
            debug!(title, "Chapter is flat");
        }
    }

    if valid == 0 {
        info!("Every chapter is back matter, skipping chapter check");
        return outline;
    }

    let ratio = detailed as f64 / valid as f64;
    info!(detailed, valid, ratio, threshold = CONSISTENCY_THRESHOLD, "Chapter depth coverage");

    if is_inconsistent(ratio) {
        warn!(ratio, "Inconsistent chapter detail, flattening to chapters");
        let mut flattened = outline;
        flattened.retain(OutlineNode::is_chapter);
        flattened
    } else {
        outline
    }
}

/// Section-depth check: drop level 3 and deeper when few sections have subsections.
pub fn check_section_depth(outline: Outline) -> Outline {
    let sections = outline.positions_at(OutlineNode::SECTION);
    if sections.is_empty() {
        return outline;
    }

    let nodes = outline.nodes();
    let detailed = sections
        .iter()
        .filter(|&&start| {
            nodes[start + 1..]
                .iter()
                .take_while(|n| n.level() > OutlineNode::SECTION)
                .any(|n| n.level() == OutlineNode::SUBSECTION)
        })
        .count();
    let total = sections.len();

    let ratio = detailed as f64 / total as f64;
    info!(detailed, total, ratio, threshold = CONSISTENCY_THRESHOLD, "Section depth coverage");

    if is_inconsistent(ratio) {
        warn!(ratio, "Inconsistent section detail, dropping subsections");
        let mut trimmed = outline;
        trimmed.retain(|n| n.level() < OutlineNode::SUBSECTION);
        trimmed
    } else {
        outline
    }
}
