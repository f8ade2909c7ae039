//! Trait definitions for the Shelfmark book TOC pipeline.
//!
//! The pipeline depends only on these traits; concrete sources, generation
//! backends and repositories live in other crates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{
    BibliographicSource, BookMasterRepository, TextGenerator, TocGenerator, UserLibraryRepository,
};
