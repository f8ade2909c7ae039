//! Book records: the pipeline artifact, the canonical master, and ownership.

use crate::{Isbn, Outline, OutlineNode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shelfmark_error::{ValidationError, ValidationErrorKind};

/// Title used when neither the hint nor the model supplied one.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// The `{title, toc}` artifact produced by the TOC pipeline.
///
/// This exact shape is what gets persisted and indexed.
///
/// # Examples
///
/// ```
/// use shelfmark_core::{BookToc, Outline};
///
/// let toc = BookToc::unknown();
/// assert_eq!(toc.title, "Unknown Title");
/// assert!(toc.toc.is_empty());
/// assert_eq!(
///     serde_json::to_string(&toc).unwrap(),
///     r#"{"title":"Unknown Title","toc":[]}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookToc {
    /// Resolved book title
    pub title: String,
    /// Normalized table of contents
    pub toc: Outline,
}

impl BookToc {
    /// Build a result with the given title and outline.
    pub fn new(title: impl Into<String>, toc: Outline) -> Self {
        Self {
            title: title.into(),
            toc,
        }
    }

    /// Title-only result with an empty outline.
    pub fn title_only(title: impl Into<String>) -> Self {
        Self::new(title, Outline::default())
    }

    /// Fully unknown result.
    pub fn unknown() -> Self {
        Self::title_only(UNKNOWN_TITLE)
    }
}

/// Pick the first non-blank title from candidates in precedence order,
/// falling back to [`UNKNOWN_TITLE`].
///
/// # Examples
///
/// ```
/// use shelfmark_core::resolve_title;
///
/// assert_eq!(resolve_title([Some(""), Some("Generated")]), "Generated");
/// assert_eq!(resolve_title([None, None]), "Unknown Title");
/// ```
pub fn resolve_title<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> String {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|title| !title.is_empty())
        .unwrap_or(UNKNOWN_TITLE)
        .to_string()
}

fn checked_title(title: &str) -> Result<String, ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::EmptyTitle));
    }
    Ok(title.to_string())
}

/// Canonical per-ISBN book record shared across all users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct BookMaster {
    /// Normalized ISBN (document key)
    isbn: Isbn,
    /// Trimmed, non-empty title
    title: String,
    /// Table of contents
    toc: Outline,
    /// User who last wrote the record
    last_updated_by: Option<String>,
    /// Creation time
    created_at: DateTime<Utc>,
    /// Last modification time
    updated_at: DateTime<Utc>,
}

impl BookMaster {
    /// Create a fresh record.
    ///
    /// # Errors
    ///
    /// Fails when the title is blank.
    pub fn new(isbn: Isbn, title: &str, toc: Outline) -> Result<Self, ValidationError> {
        let now = Utc::now();
        Ok(Self {
            isbn,
            title: checked_title(title)?,
            toc,
            last_updated_by: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Record who produced this version.
    pub fn with_last_updated_by(mut self, user_id: impl Into<String>) -> Self {
        self.last_updated_by = Some(user_id.into());
        self
    }

    /// Replace the title.
    ///
    /// # Errors
    ///
    /// Fails when the new title is blank; the record is left untouched.
    pub fn update_title(&mut self, new_title: &str) -> Result<(), ValidationError> {
        self.title = checked_title(new_title)?;
        self.touch();
        Ok(())
    }

    /// Replace the whole table of contents on behalf of a user.
    pub fn replace_toc(&mut self, toc: Outline, user_id: impl Into<String>) {
        self.toc = toc;
        self.last_updated_by = Some(user_id.into());
        self.touch();
    }

    /// Append a TOC item, rejecting a duplicate title at the same level.
    ///
    /// # Errors
    ///
    /// Fails with `DuplicateTocItem` when the title already exists at that level.
    pub fn add_toc_item(&mut self, item: OutlineNode) -> Result<(), ValidationError> {
        let duplicate = self
            .toc
            .iter()
            .any(|existing| existing.level() == item.level() && existing.title() == item.title());
        if duplicate {
            return Err(ValidationError::new(ValidationErrorKind::DuplicateTocItem {
                title: item.title().to_string(),
                level: item.level(),
            }));
        }
        self.toc.push(item);
        self.touch();
        Ok(())
    }

    /// Whether any TOC entries are present.
    pub fn has_toc(&self) -> bool {
        !self.toc.is_empty()
    }

    /// Number of level-1 entries.
    pub fn chapter_count(&self) -> usize {
        self.toc.chapter_count()
    }

    /// View as the pipeline's `{title, toc}` shape.
    pub fn to_book_toc(&self) -> BookToc {
        BookToc::new(self.title.clone(), self.toc.clone())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A book in one user's library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct UserLibraryEntry {
    /// Owner
    user_id: String,
    /// Normalized ISBN of the owned book
    isbn: Isbn,
    /// When the book was added
    added_at: DateTime<Utc>,
}

impl UserLibraryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(user_id: impl Into<String>, isbn: Isbn) -> Self {
        Self {
            user_id: user_id.into(),
            isbn,
            added_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn isbn() -> Isbn {
        Isbn::parse("9784774198701").unwrap()
    }

    #[test]
    fn test_book_master_trims_title() {
        let book = BookMaster::new(isbn(), "  Rust入門 ", Outline::default()).unwrap();
        assert_eq!(book.title(), "Rust入門");
        assert!(!book.has_toc());
    }

    #[test]
    fn test_update_title_rejects_blank() {
        let mut book = BookMaster::new(isbn(), "Rust", Outline::default()).unwrap();
        assert!(book.update_title(" ").is_err());
        assert_eq!(book.title(), "Rust");
    }

    #[test]
    fn test_add_toc_item_rejects_duplicate_at_same_level() {
        let mut book = BookMaster::new(isbn(), "Rust", Outline::default()).unwrap();
        book.add_toc_item(OutlineNode::new("Introduction", 1).unwrap())
            .unwrap();
        book.add_toc_item(OutlineNode::new("Introduction", 2).unwrap())
            .unwrap();
        let err = book
            .add_toc_item(OutlineNode::new("Introduction", 1).unwrap())
            .unwrap_err();
        assert!(matches!(
            err.kind,
            ValidationErrorKind::DuplicateTocItem { level: 1, .. }
        ));
        assert_eq!(book.chapter_count(), 1);
    }

    #[test]
    fn test_replace_toc_records_user() {
        let mut book = BookMaster::new(isbn(), "Rust", Outline::default()).unwrap();
        let toc = Outline::new(vec![OutlineNode::new("Ch1", 1).unwrap()]);
        book.replace_toc(toc.clone(), "user-1");
        assert_eq!(book.toc(), &toc);
        assert_eq!(book.last_updated_by().as_deref(), Some("user-1"));
    }
}
