//! Core data types for the Shelfmark book TOC pipeline.
//!
//! This crate provides the records passed between the metadata resolver,
//! the extractor, the normalizer and the services built on them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod book;
mod hint;
mod isbn;
mod outline;
mod request;
mod telemetry;

pub use book::{BookMaster, BookToc, UNKNOWN_TITLE, UserLibraryEntry, resolve_title};
pub use hint::{MetadataHint, MetadataHintBuilder};
pub use isbn::Isbn;
pub use outline::{Outline, OutlineNode};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse, Tool};
pub use telemetry::{DEFAULT_FILTER, init_tracing};
