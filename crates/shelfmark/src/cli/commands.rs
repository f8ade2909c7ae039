//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shelfmark - book table-of-contents lookup and normalization
#[derive(Parser, Debug)]
#[command(name = "shelfmark")]
#[command(about = "Look up and normalize book tables of contents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Load configuration from this file instead of the default layers
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a tentative book record for an ISBN
    Preview {
        /// ISBN-10 or ISBN-13, hyphens allowed
        isbn: String,

        /// Title to use instead of the generated one
        #[arg(long)]
        title: Option<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show the catalog metadata hint for an ISBN
    Hint {
        /// ISBN-10 or ISBN-13, hyphens allowed
        isbn: String,
    },

    /// Normalize an outline read from a JSON file
    Normalize {
        /// JSON file holding a toc array or a {title, toc} object
        file: PathBuf,

        /// Output format
        #[arg(long, default_value = "json")]
        format: OutputFormat,
    },

    /// Extract and normalize an outline from raw model output
    Extract {
        /// Text file holding the model's answer
        file: PathBuf,

        /// Output format
        #[arg(long, default_value = "json")]
        format: OutputFormat,
    },
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable indented outline
    Human,
    /// Pretty-printed JSON
    Json,
}
