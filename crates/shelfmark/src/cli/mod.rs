//! Command-line interface module.

mod commands;
mod local;
mod lookup;
mod render;

pub use commands::{Cli, Commands, OutputFormat};
pub use local::{extract_file, normalize_file};
pub use lookup::hint;
#[cfg(feature = "gemini")]
pub use lookup::preview;
