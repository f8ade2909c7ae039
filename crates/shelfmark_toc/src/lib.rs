//! Book table-of-contents acquisition and normalization.
//!
//! Given a free-form query, usually `"ISBN: <digits>"`, the [`TocPipeline`]
//! resolves catalog metadata, asks a search-grounded text generator for the
//! outline, extracts JSON from the untrusted answer, and
//! [`normalize`]s the outline so that depth is consistent across chapters.
//!
//! [`PreviewService`], [`RegisterService`] and [`ListBooksService`] put the
//! pipeline behind book master and user library repositories.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod normalize;
mod pipeline;
mod prompt;
mod repository;
mod service;

pub use extraction::{
    RawBookOutline, extract_book_outline, extract_json_object, parse_book_outline,
};
pub use normalize::{
    BACKMATTER_PATTERNS, CONSISTENCY_THRESHOLD, check_chapter_depth, check_section_depth,
    is_ignored_section, normalize,
};
pub use pipeline::{DEFAULT_GENERATION_TIMEOUT, TocPipeline};
pub use prompt::{build_prompt, target_info};
pub use repository::{InMemoryBookMasterRepository, InMemoryUserLibraryRepository};
pub use service::{ListBooksService, PreviewService, RegisterService, preview_query};
