//! Domain validation error types.

/// Domain rule that a value failed to satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// ISBN is not 10 or 13 characters after normalization
    #[display("ISBN must be 10 or 13 digits, got {} characters", _0)]
    InvalidIsbnLength(usize),
    /// ISBN contains something other than ASCII digits after normalization
    #[display("ISBN must contain only digits: {}", _0)]
    InvalidIsbnCharacters(String),
    /// Title is empty or whitespace only
    #[display("Title cannot be empty")]
    EmptyTitle,
    /// TOC level below 1
    #[display("TOC level must be at least 1, got {}", _0)]
    InvalidLevel(u32),
    /// TOC item with the same title already exists at the same level
    #[display("TOC item '{}' already exists at level {}", title, level)]
    DuplicateTocItem {
        /// Title of the rejected item
        title: String,
        /// Level of the rejected item
        level: u32,
    },
}

/// Validation error with source location tracking.
///
/// # Examples
///
/// ```
/// use shelfmark_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::InvalidIsbnLength(7));
/// assert!(format!("{}", err).contains("10 or 13"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The rule that was violated
    pub kind: ValidationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
