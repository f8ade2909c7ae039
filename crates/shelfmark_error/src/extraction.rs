//! Outline extraction error types.

/// Reasons raw model text yielded no usable JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ExtractionErrorKind {
    /// Text contains no `{` at all
    #[display("No opening brace found in response (length: {})", _0)]
    NoOpeningBrace(usize),
    /// Neither the balanced nor the greedy span parsed as JSON
    #[display("Failed to decode JSON from response: {}", _0)]
    Unparseable(String),
    /// A JSON value was found but it is not an object
    #[display("Extracted JSON is not an object")]
    NotAnObject,
}

/// Extraction error with source location tracking.
///
/// # Examples
///
/// ```
/// use shelfmark_error::{ExtractionError, ExtractionErrorKind};
///
/// let err = ExtractionError::new(ExtractionErrorKind::NoOpeningBrace(12));
/// assert!(format!("{}", err).contains("No opening brace"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Extraction Error: {} at line {} in {}", kind, line, file)]
pub struct ExtractionError {
    /// The specific error condition
    pub kind: ExtractionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ExtractionError {
    /// Create a new ExtractionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtractionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
