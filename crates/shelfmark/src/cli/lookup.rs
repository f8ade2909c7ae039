//! Online commands: preview and hint.

use shelfmark::{HintResolver, Isbn, ShelfmarkConfig};
#[cfg(feature = "gemini")]
use {
    super::{OutputFormat, render},
    shelfmark::{GeminiClient, InMemoryBookMasterRepository, PreviewService, TocPipeline},
    std::sync::Arc,
};

/// Generate a tentative book record and print it.
#[cfg(feature = "gemini")]
pub async fn preview(
    config: &ShelfmarkConfig,
    isbn: &str,
    title: Option<&str>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let generator = GeminiClient::from_config(&config.gemini)?;
    let resolver = HintResolver::from_config(&config.metadata)?;
    let pipeline =
        TocPipeline::new(Arc::new(generator), resolver).with_timeout(config.gemini.timeout());

    let service = PreviewService::new(
        Arc::new(InMemoryBookMasterRepository::new()),
        Arc::new(pipeline),
    );
    let book = service.preview(isbn, title).await?;

    println!("{}", render::book_master(&book, format)?);
    Ok(())
}

/// Resolve and print the metadata hint for an ISBN.
pub async fn hint(config: &ShelfmarkConfig, isbn: &str) -> Result<(), Box<dyn std::error::Error>> {
    let isbn = Isbn::parse(isbn)?;
    let resolver = HintResolver::from_config(&config.metadata)?;

    let hint = resolver.resolve_hint(&isbn).await;
    println!("{}", serde_json::to_string_pretty(&hint)?);
    Ok(())
}
