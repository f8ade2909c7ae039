//! Bibliographic metadata hints for Shelfmark.
//!
//! A hint (`title`, `authors`, `description`) biases TOC generation toward
//! the right book. Two catalog sources are provided and chained by
//! [`HintResolver`]:
//!
//! - [`NdlSource`] - National Diet Library Search (accurate Japanese titles)
//! - [`GoogleBooksSource`] - Google Books volumes API
//!
//! Each request carries a bounded timeout, and any failure simply moves on
//! to the next source.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod google_books;
mod http;
mod ndl;
mod resolver;

pub use google_books::{GoogleBooksSource, parse_google_books_response};
pub use ndl::{NdlSource, clean_creator, parse_ndl_response};
pub use resolver::HintResolver;
