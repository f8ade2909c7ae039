//! Outline document decoding errors.

/// A document that should hold an outline did not decode as JSON.
///
/// Raised for outline files read from disk. Model responses go through
/// [`ExtractionError`](crate::ExtractionError) instead.
///
/// # Examples
///
/// ```
/// use shelfmark_error::JsonError;
///
/// let err = JsonError::new("expected value at line 1 column 1");
/// assert!(format!("{}", err).contains("Invalid outline document"));
/// assert_eq!(err.message, "expected value at line 1 column 1");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invalid outline document: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// Decoder message
    pub message: String,
    /// Line number where the error was raised
    pub line: u32,
    /// Source file where the error was raised
    pub file: &'static str,
}

impl JsonError {
    /// Wrap a decoder message, recording the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
