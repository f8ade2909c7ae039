//! Bibliographic source error types.

/// Failure modes of a single bibliographic lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum MetadataErrorKind {
    /// Request could not be sent or timed out
    #[display("{} request failed: {}", source_name, message)]
    Http {
        /// Name of the bibliographic source
        source_name: String,
        /// Transport error message
        message: String,
    },
    /// Source answered with a non-success status
    #[display("{} returned HTTP {}", source_name, status_code)]
    Status {
        /// Name of the bibliographic source
        source_name: String,
        /// HTTP status code
        status_code: u16,
    },
    /// Payload could not be parsed
    #[display("{} payload malformed: {}", source_name, message)]
    Parse {
        /// Name of the bibliographic source
        source_name: String,
        /// Parser error message
        message: String,
    },
}

/// Bibliographic source error with source location tracking.
///
/// # Examples
///
/// ```
/// use shelfmark_error::{MetadataError, MetadataErrorKind};
///
/// let err = MetadataError::new(MetadataErrorKind::Status {
///     source_name: "ndl".to_string(),
///     status_code: 503,
/// });
/// assert!(format!("{}", err).contains("HTTP 503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Metadata Error: {} at line {} in {}", kind, line, file)]
pub struct MetadataError {
    /// The kind of error that occurred
    pub kind: MetadataErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl MetadataError {
    /// Create a new MetadataError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MetadataErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
