//! Google Books volumes API source (fallback).

use crate::http::{client_with_timeout, get_text};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use shelfmark_config::MetadataConfig;
use shelfmark_core::{Isbn, MetadataHint};
use shelfmark_error::{MetadataError, MetadataErrorKind, ShelfmarkResult};
use shelfmark_interface::BibliographicSource;
use std::time::Duration;
use tracing::instrument;

const SOURCE_NAME: &str = "google_books";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumesResponse {
    #[serde(default)]
    total_items: u64,
    #[serde(default)]
    items: Vec<Volume>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Volume {
    #[serde(default)]
    volume_info: Option<VolumeInfo>,
}

/// Any field may be absent or `null`.
#[derive(Debug, Default, Deserialize)]
struct VolumeInfo {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    authors: Option<Vec<String>>,
}

/// Parse a Google Books volumes search payload into a hint.
///
/// Returns `Ok(None)` when `totalItems` is zero or no item carries a title.
///
/// # Errors
///
/// Fails when the payload is not the expected JSON shape.
///
/// # Examples
///
/// ```
/// use shelfmark_metadata::parse_google_books_response;
///
/// let json = r#"{"totalItems": 1, "items": [{"volumeInfo": {
///     "title": "The Rust Programming Language",
///     "authors": ["Steve Klabnik", "Carol Nichols"]
/// }}]}"#;
///
/// let hint = parse_google_books_response(json).unwrap().unwrap();
/// assert_eq!(hint.authors().len(), 2);
/// ```
pub fn parse_google_books_response(json: &str) -> ShelfmarkResult<Option<MetadataHint>> {
    let response: VolumesResponse = serde_json::from_str(json).map_err(|e| {
        MetadataError::new(MetadataErrorKind::Parse {
            source_name: SOURCE_NAME.to_string(),
            message: e.to_string(),
        })
    })?;

    if response.total_items == 0 {
        return Ok(None);
    }

    let Some(volume) = response.items.into_iter().next() else {
        return Ok(None);
    };
    let info = volume.volume_info.unwrap_or_default();
    let title = info.title.unwrap_or_default();
    if title.trim().is_empty() {
        return Ok(None);
    }

    let hint = MetadataHint::builder()
        .title(title)
        .authors(info.authors.unwrap_or_default())
        .description(info.description.unwrap_or_default())
        .build()
        .map_err(|e| {
            MetadataError::new(MetadataErrorKind::Parse {
                source_name: SOURCE_NAME.to_string(),
                message: e.to_string(),
            })
        })?;
    Ok(Some(hint))
}

/// Google Books volumes API client.
#[derive(Debug, Clone)]
pub struct GoogleBooksSource {
    client: Client,
    base_url: String,
}

impl GoogleBooksSource {
    /// Create a source hitting `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ShelfmarkResult<Self> {
        Ok(Self {
            client: client_with_timeout(timeout)?,
            base_url: base_url.into(),
        })
    }

    /// Create a source from the `[metadata]` configuration section.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built.
    pub fn from_config(config: &MetadataConfig) -> ShelfmarkResult<Self> {
        Self::new(config.google_books_base_url.clone(), config.timeout())
    }
}

#[async_trait]
impl BibliographicSource for GoogleBooksSource {
    #[instrument(skip(self), fields(isbn = %isbn))]
    async fn lookup(&self, isbn: &Isbn) -> ShelfmarkResult<Option<MetadataHint>> {
        let query = format!("isbn:{}", isbn);
        let body = get_text(&self.client, SOURCE_NAME, &self.base_url, &[("q", query.as_str())]).await?;
        parse_google_books_response(&body)
    }

    fn name(&self) -> &'static str {
        SOURCE_NAME
    }
}
