//! Priority-ordered bibliographic hint resolution.

use crate::{GoogleBooksSource, NdlSource};
use shelfmark_config::MetadataConfig;
use shelfmark_core::{Isbn, MetadataHint};
use shelfmark_error::ShelfmarkResult;
use shelfmark_interface::BibliographicSource;
use tracing::{info, instrument, warn};

/// Tries bibliographic sources one after another until one yields a title.
///
/// Sources are consulted sequentially, never concurrently: later sources
/// are fallbacks and are only called when every earlier one came up empty.
/// Failures are logged and skipped; resolution itself never fails.
pub struct HintResolver {
    sources: Vec<Box<dyn BibliographicSource>>,
}

impl std::fmt::Debug for HintResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HintResolver")
            .field(
                "sources",
                &self.sources.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl HintResolver {
    /// Resolver over sources in the given priority order.
    pub fn new(sources: Vec<Box<dyn BibliographicSource>>) -> Self {
        Self { sources }
    }

    /// NDL Search first, Google Books second.
    ///
    /// # Errors
    ///
    /// Fails if an HTTP client cannot be built.
    pub fn from_config(config: &MetadataConfig) -> ShelfmarkResult<Self> {
        Ok(Self::new(vec![
            Box::new(NdlSource::from_config(config)?),
            Box::new(GoogleBooksSource::from_config(config)?),
        ]))
    }

    /// Names of the configured sources in priority order.
    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|source| source.name()).collect()
    }

    /// Resolve a hint for an ISBN.
    ///
    /// Returns the first hint with a non-blank title, or an empty hint.
    #[instrument(skip(self), fields(isbn = %isbn))]
    pub async fn resolve_hint(&self, isbn: &Isbn) -> MetadataHint {
        for source in &self.sources {
            match source.lookup(isbn).await {
                Ok(Some(hint)) if hint.has_title() => {
                    info!(source = source.name(), title = %hint.title(), "Resolved metadata hint");
                    return hint;
                }
                Ok(_) => {
                    info!(source = source.name(), "Source returned no title, trying next");
                }
                Err(e) => {
                    warn!(source = source.name(), error = %e, "Source lookup failed, trying next");
                }
            }
        }

        info!("No source produced a title, using empty hint");
        MetadataHint::default()
    }
}
