//! Repository error types.

/// Repository error conditions.
///
/// The in-memory repositories never fail. These exist for persistent
/// `BookMasterRepository` and `UserLibraryRepository` implementations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Record not found
    #[display("Book not found: {}", _0)]
    NotFound(String),
    /// Backend rejected the operation
    #[display("Storage backend error: {}", _0)]
    Backend(String),
}

/// Repository error with location tracking.
///
/// # Examples
///
/// ```
/// use shelfmark_error::{ShelfmarkError, StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::NotFound("9784873119786".into()));
/// assert!(format!("{}", err).contains("Book not found: 9784873119786"));
///
/// let err: ShelfmarkError = err.into();
/// assert!(format!("{}", err).contains("Storage Error"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new StorageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
