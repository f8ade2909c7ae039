//! Layered TOML configuration for Shelfmark.
//!
//! Bundled defaults ship with the library; user files in the home
//! directory and the working directory override them key by key.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::{GeminiConfig, MetadataConfig, ShelfmarkConfig};
