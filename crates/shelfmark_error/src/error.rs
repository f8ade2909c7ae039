//! Top-level error wrapper types.

use crate::{
    ConfigError, ExtractionError, GenerationError, HttpError, JsonError, MetadataError,
    StorageError, ValidationError,
};

/// Every error condition a Shelfmark crate can surface.
///
/// # Examples
///
/// ```
/// use shelfmark_error::{ShelfmarkError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: ShelfmarkError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ShelfmarkErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// Outline document decoding error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Domain validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Bibliographic source error
    #[from(MetadataError)]
    Metadata(MetadataError),
    /// Outline extraction error
    #[from(ExtractionError)]
    Extraction(ExtractionError),
    /// Text generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Repository error
    #[from(StorageError)]
    Storage(StorageError),
}

/// Shelfmark error with kind discrimination.
///
/// # Examples
///
/// ```
/// use shelfmark_error::{ShelfmarkResult, ConfigError};
///
/// fn might_fail() -> ShelfmarkResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Shelfmark Error: {}", _0)]
pub struct ShelfmarkError(Box<ShelfmarkErrorKind>);

impl ShelfmarkError {
    /// Create a new error from a kind.
    pub fn new(kind: ShelfmarkErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ShelfmarkErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ShelfmarkErrorKind
impl<T> From<T> for ShelfmarkError
where
    T: Into<ShelfmarkErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Shelfmark operations.
pub type ShelfmarkResult<T> = std::result::Result<T, ShelfmarkError>;
