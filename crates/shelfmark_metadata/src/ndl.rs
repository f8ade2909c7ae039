//! National Diet Library (NDL Search) OpenSearch source.
//!
//! NDL answers with RSS; the first `<item>` carries Dublin Core fields.
//! Creator strings look like `"水野, 貴明, 1973-"` and need cleaning.

use crate::http::{client_with_timeout, get_text};
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use shelfmark_config::MetadataConfig;
use shelfmark_core::{Isbn, MetadataHint};
use shelfmark_error::{MetadataError, MetadataErrorKind, ShelfmarkResult};
use shelfmark_interface::BibliographicSource;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::instrument;

const SOURCE_NAME: &str = "ndl";
const DC_NS: &str = "http://purl.org/dc/elements/1.1/";

static BIRTH_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-?").expect("birth year pattern is valid"));

/// Clean an NDL `dc:creator` value into a display name.
///
/// Splits on commas, drops life-date parts and joins the rest.
///
/// # Examples
///
/// ```
/// use shelfmark_metadata::clean_creator;
///
/// assert_eq!(clean_creator("水野, 貴明, 1973-"), Some("水野貴明".to_string()));
/// assert_eq!(clean_creator("1973-"), None);
/// ```
pub fn clean_creator(raw: &str) -> Option<String> {
    let name: String = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !BIRTH_YEAR.is_match(part))
        .collect();
    (!name.is_empty()).then_some(name)
}

/// Parse an NDL OpenSearch RSS payload into a hint.
///
/// Returns `Ok(None)` when there is no item or the item has no title.
///
/// # Errors
///
/// Fails when the payload is not well-formed XML.
pub fn parse_ndl_response(xml: &str) -> ShelfmarkResult<Option<MetadataHint>> {
    let doc = roxmltree::Document::parse(xml).map_err(|e| {
        MetadataError::new(MetadataErrorKind::Parse {
            source_name: SOURCE_NAME.to_string(),
            message: e.to_string(),
        })
    })?;

    let Some(item) = doc
        .descendants()
        .find(|node| node.is_element() && node.has_tag_name("item"))
    else {
        return Ok(None);
    };

    let dc_text = |name: &str| {
        item.children()
            .find(|node| node.has_tag_name((DC_NS, name)))
            .and_then(|node| node.text())
            .map(str::trim)
            .unwrap_or_default()
            .to_string()
    };

    let title = dc_text("title");
    if title.is_empty() {
        return Ok(None);
    }

    let authors = clean_creator(&dc_text("creator")).into_iter().collect::<Vec<_>>();

    Ok(Some(
        MetadataHint::builder()
            .title(title)
            .authors(authors)
            .build()
            .map_err(|e| {
                MetadataError::new(MetadataErrorKind::Parse {
                    source_name: SOURCE_NAME.to_string(),
                    message: e.to_string(),
                })
            })?,
    ))
}

/// NDL Search OpenSearch client.
#[derive(Debug, Clone)]
pub struct NdlSource {
    client: Client,
    base_url: String,
}

impl NdlSource {
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
        Self::new(config.ndl_base_url.clone(), config.timeout())
    }
}

#[async_trait]
impl BibliographicSource for NdlSource {
    #[instrument(skip(self), fields(isbn = %isbn))]
    async fn lookup(&self, isbn: &Isbn) -> ShelfmarkResult<Option<MetadataHint>> {
        let body = get_text(
            &self.client,
            SOURCE_NAME,
            &self.base_url,
            &[("isbn", isbn.as_str())],
        )
        .await?;
        parse_ndl_response(&body)
    }

    fn name(&self) -> &'static str {
        SOURCE_NAME
    }
}
