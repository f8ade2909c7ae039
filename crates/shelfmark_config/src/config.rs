//! Configuration structures and layered loading.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Bundled defaults (include_str! from shelfmark.toml)
//! 2. ~/.config/shelfmark/shelfmark.toml
//! 3. ./shelfmark.toml

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use shelfmark_error::{ConfigError, ShelfmarkError, ShelfmarkResult};
use std::time::Duration;
use tracing::{debug, instrument};

/// Generation backend settings.
///
/// ```toml
/// [gemini]
/// model = "gemini-2.5-flash"
/// timeout_secs = 120
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// Model used when a request does not name one
    #[serde(default = "default_model")]
    pub model: String,

    /// REST API root, without trailing slash
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    /// Upper bound on a single generation call
    #[serde(default = "default_generation_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_gemini_base_url(),
            timeout_secs: default_generation_timeout(),
        }
    }
}

impl GeminiConfig {
    /// Generation timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Bibliographic source settings.
///
/// ```toml
/// [metadata]
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MetadataConfig {
    /// Upper bound on each source request
    #[serde(default = "default_lookup_timeout")]
    pub timeout_secs: u64,

    /// National Diet Library OpenSearch endpoint
    #[serde(default = "default_ndl_base_url")]
    pub ndl_base_url: String,

    /// Google Books volumes endpoint
    #[serde(default = "default_google_books_base_url")]
    pub google_books_base_url: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_lookup_timeout(),
            ndl_base_url: default_ndl_base_url(),
            google_books_base_url: default_google_books_base_url(),
        }
    }
}

impl MetadataConfig {
    /// Per-request timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_generation_timeout() -> u64 {
    120
}

fn default_lookup_timeout() -> u64 {
    10
}

fn default_ndl_base_url() -> String {
    "https://ndlsearch.ndl.go.jp/api/opensearch".to_string()
}

fn default_google_books_base_url() -> String {
    "https://www.googleapis.com/books/v1/volumes".to_string()
}

/// Top-level Shelfmark configuration.
///
/// # Example
///
/// ```no_run
/// use shelfmark_config::ShelfmarkConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ShelfmarkConfig::load()?;
/// println!("TOC model: {}", config.gemini.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct ShelfmarkConfig {
    /// Generation backend settings
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Bibliographic source settings
    #[serde(default)]
    pub metadata: MetadataConfig,
}

impl ShelfmarkConfig {
    /// Load configuration from a specific file path.
    ///
    /// Missing keys fall back to built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ShelfmarkResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ShelfmarkError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ShelfmarkError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file is malformed or a value is invalid.
    #[instrument]
    pub fn load() -> ShelfmarkResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../shelfmark.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/shelfmark/shelfmark.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("shelfmark").required(false));

        let config: Self = builder
            .build()
            .map_err(|e| {
                ShelfmarkError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ShelfmarkError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values the pipeline cannot run with.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first offending key.
    pub fn validate(&self) -> ShelfmarkResult<()> {
        if self.gemini.timeout_secs == 0 {
            return Err(ConfigError::new("gemini.timeout_secs must be positive").into());
        }
        if self.metadata.timeout_secs == 0 {
            return Err(ConfigError::new("metadata.timeout_secs must be positive").into());
        }
        if self.gemini.model.trim().is_empty() {
            return Err(ConfigError::new("gemini.model cannot be empty").into());
        }
        Ok(())
    }
}
