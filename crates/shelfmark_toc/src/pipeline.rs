//! The outline generation pipeline.

use async_trait::async_trait;
use shelfmark_core::{BookToc, GenerateRequest, Isbn, MetadataHint, Tool, resolve_title};
use shelfmark_interface::{TextGenerator, TocGenerator};
use shelfmark_metadata::HintResolver;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::{build_prompt, extract_book_outline, normalize};

/// Default bound on a single generation call.
pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(120);

/// Turns a free-form query into a `{title, toc}` result.
///
/// Steps: resolve a metadata hint when the query carries an `ISBN:` token,
/// ask the generator with search grounding enabled, extract the outline,
/// normalize it, then pick the title. Every failure degrades to a
/// title-only result; the pipeline never errors.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use shelfmark_metadata::HintResolver;
/// use shelfmark_models::GeminiClient;
/// use shelfmark_toc::TocPipeline;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pipeline = TocPipeline::new(Arc::new(GeminiClient::new()?), HintResolver::new(vec![]));
/// let result = pipeline.generate_outline("ISBN: 9784873119786").await;
/// println!("{} ({} entries)", result.title, result.toc.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TocPipeline {
    generator: Arc<dyn TextGenerator>,
    resolver: Arc<HintResolver>,
    timeout: Duration,
}

impl std::fmt::Debug for TocPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TocPipeline")
            .field("provider", &self.generator.provider_name())
            .field("model", &self.generator.model_name())
            .field("resolver", &self.resolver)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl TocPipeline {
    /// Pipeline with the default generation timeout.
    pub fn new(generator: Arc<dyn TextGenerator>, resolver: HintResolver) -> Self {
        Self {
            generator,
            resolver: Arc::new(resolver),
            timeout: DEFAULT_GENERATION_TIMEOUT,
        }
    }

    /// Override the generation timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Generation timeout in effect.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run the pipeline for one query.
    #[instrument(skip(self), fields(provider = self.generator.provider_name()))]
    pub async fn generate_outline(&self, query: &str) -> BookToc {
        let hint = match Isbn::find_in_query(query) {
            Some(isbn) => self.resolver.resolve_hint(&isbn).await,
            None => MetadataHint::default(),
        };

        let text = match self.generate_text(&hint, query).await {
            Some(text) => text,
            None => return fallback(&hint),
        };

        let raw = match extract_book_outline(&text) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, response_length = text.len(), "Could not extract outline");
                return fallback(&hint);
            }
        };

        let toc = normalize(raw.toc);
        let title = resolve_title([hint.title_if_present(), raw.title.as_deref()]);
        info!(title = %title, entries = toc.len(), "Generated outline");

        BookToc::new(title, toc)
    }

    /// Call the generator under the timeout. `None` on any failure.
    async fn generate_text(&self, hint: &MetadataHint, query: &str) -> Option<String> {
        let request = match GenerateRequest::builder()
            .prompt(build_prompt(hint, query))
            .tools(vec![Tool::GoogleSearch])
            .build()
        {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Could not build generation request");
                return None;
            }
        };

        match tokio::time::timeout(self.timeout, self.generator.generate(&request)).await {
            Ok(Ok(response)) => Some(response.text),
            Ok(Err(e)) => {
                warn!(error = %e, "Generation failed");
                None
            }
            Err(_) => {
                warn!(timeout_secs = self.timeout.as_secs(), "Generation timed out");
                None
            }
        }
    }
}

/// Title-only result used whenever generation or extraction fails.
fn fallback(hint: &MetadataHint) -> BookToc {
    BookToc::title_only(resolve_title([hint.title_if_present()]))
}

#[async_trait]
impl TocGenerator for TocPipeline {
    async fn generate_from_query(&self, query: &str) -> BookToc {
        self.generate_outline(query).await
    }
}
