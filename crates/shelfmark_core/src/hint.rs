//! Bibliographic metadata hints.

use serde::{Deserialize, Serialize};

/// Best-effort bibliographic metadata for a book.
///
/// Every field may be empty. A hint biases generation and may supply the
/// title, but never overrides a title the user typed in.
///
/// # Examples
///
/// ```
/// use shelfmark_core::MetadataHint;
///
/// let hint = MetadataHint::builder()
///     .title("プログラミングRust")
///     .authors(vec!["Jim Blandy".to_string()])
///     .build()
///     .unwrap();
///
/// assert!(hint.has_title());
/// assert!(hint.description().is_empty());
/// assert!(!MetadataHint::default().has_title());
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct MetadataHint {
    /// Book title as the source spells it.
    #[serde(default)]
    title: String,
    /// Author display names in source order.
    #[serde(default)]
    authors: Vec<String>,
    /// Free-text description, often empty.
    #[serde(default)]
    description: String,
}

impl MetadataHint {
    /// Creates a new hint builder.
    pub fn builder() -> MetadataHintBuilder {
        MetadataHintBuilder::default()
    }

    /// Whether the hint carries a usable (non-blank) title.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Title if non-blank.
    pub fn title_if_present(&self) -> Option<&str> {
        self.has_title().then_some(self.title.as_str())
    }
}
