//! Shelfmark: book table-of-contents acquisition and normalization.
//!
//! Given an ISBN or a free-form query, Shelfmark looks up catalog metadata,
//! asks a search-grounded LLM for the table of contents, extracts JSON from
//! the answer, and normalizes the outline so its depth is consistent.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shelfmark::{GeminiClient, HintResolver, ShelfmarkConfig, TocPipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ShelfmarkConfig::load()?;
//!     let pipeline = TocPipeline::new(
//!         Arc::new(GeminiClient::from_config(&config.gemini)?),
//!         HintResolver::from_config(&config.metadata)?,
//!     );
//!
//!     let book = pipeline.generate_outline("ISBN: 9784873119786").await;
//!     println!("{}", serde_json::to_string_pretty(&book)?);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `shelfmark_error` - Error types
//! - `shelfmark_core` - Records: ISBN, outline, hint, book master
//! - `shelfmark_interface` - Collaborator traits
//! - `shelfmark_config` - Layered TOML configuration
//! - `shelfmark_metadata` - NDL Search and Google Books hint sources
//! - `shelfmark_models` - Text generation backends
//! - `shelfmark_toc` - Extraction, normalization, pipeline, services
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use shelfmark_error::*;

pub use shelfmark_core::{
    BookMaster, BookToc, DEFAULT_FILTER, GenerateRequest, GenerateRequestBuilder,
    GenerateResponse, Isbn, MetadataHint, MetadataHintBuilder, Outline, OutlineNode, Tool,
    UNKNOWN_TITLE, UserLibraryEntry, init_tracing, resolve_title,
};

pub use shelfmark_interface::{
    BibliographicSource, BookMasterRepository, TextGenerator, TocGenerator,
    UserLibraryRepository,
};

pub use shelfmark_config::{GeminiConfig, MetadataConfig, ShelfmarkConfig};

pub use shelfmark_metadata::{GoogleBooksSource, HintResolver, NdlSource};

#[cfg(feature = "gemini")]
pub use shelfmark_models::GeminiClient;

pub use shelfmark_toc::{
    BACKMATTER_PATTERNS, CONSISTENCY_THRESHOLD, InMemoryBookMasterRepository,
    InMemoryUserLibraryRepository, ListBooksService, PreviewService, RawBookOutline,
    RegisterService, TocPipeline, extract_book_outline, extract_json_object, is_ignored_section,
    normalize, parse_book_outline,
};
