//! Outline types: the ordered, level-tagged table of contents.

use serde::{Deserialize, Serialize};
use shelfmark_error::{ValidationError, ValidationErrorKind};

/// A single entry in a table of contents.
///
/// Level 1 is a chapter, 2 a section, 3 a subsection. Deeper levels are
/// carried through untouched.
///
/// # Examples
///
/// ```
/// use shelfmark_core::OutlineNode;
///
/// let node = OutlineNode::new("  Chapter 1: Basics ", 1).unwrap();
/// assert_eq!(node.title(), "Chapter 1: Basics");
/// assert_eq!(node.level(), 1);
///
/// assert!(OutlineNode::new("   ", 1).is_err());
/// assert!(OutlineNode::new("Preface", 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UncheckedNode")]
pub struct OutlineNode {
    title: String,
    level: u32,
}

#[derive(Deserialize)]
struct UncheckedNode {
    title: String,
    #[serde(default = "default_level")]
    level: u32,
}

fn default_level() -> u32 {
    OutlineNode::CHAPTER
}

impl TryFrom<UncheckedNode> for OutlineNode {
    type Error = ValidationError;

    fn try_from(raw: UncheckedNode) -> Result<Self, Self::Error> {
        Self::new(raw.title, raw.level)
    }
}

impl OutlineNode {
    /// Chapter depth marker.
    pub const CHAPTER: u32 = 1;
    /// Section depth marker.
    pub const SECTION: u32 = 2;
    /// Subsection depth marker.
    pub const SUBSECTION: u32 = 3;

    /// Create a node, trimming the title.
    ///
    /// # Errors
    ///
    /// Fails when the trimmed title is empty or the level is zero.
    #[track_caller]
    pub fn new(title: impl AsRef<str>, level: u32) -> Result<Self, ValidationError> {
        let title = title.as_ref().trim();
        if title.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyTitle));
        }
        if level < Self::CHAPTER {
            return Err(ValidationError::new(ValidationErrorKind::InvalidLevel(level)));
        }
        Ok(Self {
            title: title.to_string(),
            level,
        })
    }

    /// Trimmed, non-empty title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Depth marker (1-based).
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Whether this node is a chapter.
    pub fn is_chapter(&self) -> bool {
        self.level == Self::CHAPTER
    }
}

/// Document-ordered sequence of outline nodes.
///
/// There are no parent pointers: a node's children are the run of
/// immediately following nodes with a strictly greater level.
///
/// Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outline(Vec<OutlineNode>);

impl Outline {
    /// Wrap an ordered list of nodes.
    pub fn new(nodes: Vec<OutlineNode>) -> Self {
        Self(nodes)
    }

    /// Nodes in document order.
    pub fn nodes(&self) -> &[OutlineNode] {
        &self.0
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the outline has no nodes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate nodes in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, OutlineNode> {
        self.0.iter()
    }

    /// Positions of all nodes at exactly `level`.
    pub fn positions_at(&self, level: u32) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, node)| node.level == level)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of level-1 nodes.
    pub fn chapter_count(&self) -> usize {
        self.0.iter().filter(|node| node.is_chapter()).count()
    }

    /// Deepest level present, if any.
    pub fn max_level(&self) -> Option<u32> {
        self.0.iter().map(OutlineNode::level).max()
    }

    /// Append a node at the end.
    pub fn push(&mut self, node: OutlineNode) {
        self.0.push(node);
    }

    /// Keep only nodes matching the predicate, preserving order.
    pub fn retain(&mut self, keep: impl FnMut(&OutlineNode) -> bool) {
        self.0.retain(keep);
    }

    /// Unwrap into the underlying vector.
    pub fn into_inner(self) -> Vec<OutlineNode> {
        self.0
    }
}

impl From<Vec<OutlineNode>> for Outline {
    fn from(nodes: Vec<OutlineNode>) -> Self {
        Self(nodes)
    }
}

impl FromIterator<OutlineNode> for Outline {
    fn from_iter<I: IntoIterator<Item = OutlineNode>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Outline {
    type Item = OutlineNode;
    type IntoIter = std::vec::IntoIter<OutlineNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a OutlineNode;
    type IntoIter = std::slice::Iter<'a, OutlineNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults_level_to_chapter() {
        let node: OutlineNode = serde_json::from_str(r#"{"title": "Preface"}"#).unwrap();
        assert_eq!(node.level(), 1);
    }

    #[test]
    fn test_deserialize_rejects_blank_title() {
        let result: Result<OutlineNode, _> =
            serde_json::from_str(r#"{"title": "  ", "level": 2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_outline_serializes_as_array() {
        let outline = Outline::new(vec![
            OutlineNode::new("Ch1", 1).unwrap(),
            OutlineNode::new("1.1", 2).unwrap(),
        ]);
        let json = serde_json::to_string(&outline).unwrap();
        assert_eq!(
            json,
            r#"[{"title":"Ch1","level":1},{"title":"1.1","level":2}]"#
        );
    }

    #[test]
    fn test_positions_at_level() {
        let outline: Outline = [("Ch1", 1), ("1.1", 2), ("Ch2", 1)]
            .into_iter()
            .map(|(t, l)| OutlineNode::new(t, l).unwrap())
            .collect();
        assert_eq!(outline.positions_at(1), vec![0, 2]);
        assert_eq!(outline.chapter_count(), 2);
        assert_eq!(outline.max_level(), Some(2));
    }
}
