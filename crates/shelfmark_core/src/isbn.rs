//! ISBN normalization and validation.

use regex::Regex;
use serde::{Deserialize, Serialize};
use shelfmark_error::{ValidationError, ValidationErrorKind};
use std::sync::LazyLock;

static ISBN_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"ISBN:\s*(\d{10,13})").expect("ISBN token pattern is valid")
});

/// A normalized ISBN: 10 or 13 ASCII digits, no separators.
///
/// Used as the document key for canonical book records.
///
/// # Examples
///
/// ```
/// use shelfmark_core::Isbn;
///
/// let isbn = Isbn::parse("978-4-7741-9 87 0-1").unwrap();
/// assert_eq!(isbn.as_str(), "9784774198701");
///
/// assert!(Isbn::parse("12345").is_err());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn(String);

impl Isbn {
    /// Remove hyphens and spaces without validating.
    pub fn normalize(raw: &str) -> String {
        raw.chars().filter(|c| *c != '-' && *c != ' ').collect()
    }

    /// Normalize and validate an ISBN.
    ///
    /// # Errors
    ///
    /// Fails when the normalized value is not 10 or 13 characters long or
    /// contains anything but ASCII digits.
    #[track_caller]
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let normalized = Self::normalize(raw);
        let len = normalized.chars().count();
        if len != 10 && len != 13 {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidIsbnLength(len),
            ));
        }
        if !normalized.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidIsbnCharacters(normalized),
            ));
        }
        Ok(Self(normalized))
    }

    /// Find an `ISBN:` token in a free-form query.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelfmark_core::Isbn;
    ///
    /// let isbn = Isbn::find_in_query("ISBN: 9784774198701 (Title: Rust入門)").unwrap();
    /// assert_eq!(isbn.as_str(), "9784774198701");
    /// assert!(Isbn::find_in_query("just a title").is_none());
    /// ```
    pub fn find_in_query(query: &str) -> Option<Self> {
        let captures = ISBN_TOKEN.captures(query)?;
        let digits = captures.get(1)?.as_str();
        Self::parse(digits).ok()
    }

    /// The normalized digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Isbn {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<Isbn> for String {
    fn from(isbn: Isbn) -> Self {
        isbn.0
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_separators() {
        assert_eq!(Isbn::normalize("4-7741-9870-X"), "477419870X");
    }

    #[test]
    fn test_isbn10_accepted() {
        assert_eq!(Isbn::parse("4774198706").unwrap().as_str(), "4774198706");
    }

    #[test]
    fn test_non_digit_rejected() {
        let err = Isbn::parse("477419870X").unwrap_err();
        assert!(matches!(
            err.kind,
            ValidationErrorKind::InvalidIsbnCharacters(_)
        ));
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = Isbn::parse("97847741987").unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidIsbnLength(11));
    }

    #[test]
    fn test_query_token_without_space() {
        let isbn = Isbn::find_in_query("ISBN:4774198706").unwrap();
        assert_eq!(isbn.as_str(), "4774198706");
    }

    #[test]
    fn test_query_token_with_invalid_length_ignored() {
        assert!(Isbn::find_in_query("ISBN: 12345678901").is_none());
    }
}
