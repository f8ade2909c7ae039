//! Error types for the Shelfmark library.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use shelfmark_error::{ShelfmarkResult, ValidationError, ValidationErrorKind};
//!
//! fn check_title(title: &str) -> ShelfmarkResult<()> {
//!     if title.trim().is_empty() {
//!         Err(ValidationError::new(ValidationErrorKind::EmptyTitle))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_title("   ").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod extraction;
mod generation;
mod http;
mod json;
mod metadata;
mod storage;
mod validation;

pub use config::ConfigError;
pub use error::{ShelfmarkError, ShelfmarkErrorKind, ShelfmarkResult};
pub use extraction::{ExtractionError, ExtractionErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};
pub use http::HttpError;
pub use json::JsonError;
pub use metadata::{MetadataError, MetadataErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
