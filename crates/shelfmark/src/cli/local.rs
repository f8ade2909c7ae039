//! Offline commands: normalize and extract.

use super::{OutputFormat, render};
use shelfmark::{
    BookToc, ShelfmarkResult, extract_book_outline, normalize, parse_book_outline, resolve_title,
};
use std::path::Path;
use tracing::info;

/// Read an outline document: a bare toc array or a `{title, toc}` object.
pub fn parse_outline_document(text: &str) -> ShelfmarkResult<BookToc> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| shelfmark::JsonError::new(e.to_string()))?;
    let value = match value {
        serde_json::Value::Array(_) => serde_json::json!({ "toc": value }),
        other => other,
    };

    let raw = parse_book_outline(&value)?;
    Ok(BookToc::new(resolve_title([raw.title.as_deref()]), raw.toc))
}

/// Normalize the outline in a JSON file and print it.
pub fn normalize_file(path: &Path, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let document = parse_outline_document(&std::fs::read_to_string(path)?)?;
    let input_nodes = document.toc.len();

    let result = BookToc::new(document.title, normalize(document.toc));
    info!(input_nodes, output_nodes = result.toc.len(), "Normalized outline file");

    println!("{}", render::book_toc(&result, format)?);
    Ok(())
}

/// Extract an outline from raw model text, normalize it and print it.
pub fn extract_file(path: &Path, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let raw = extract_book_outline(&std::fs::read_to_string(path)?)?;

    let result = BookToc::new(resolve_title([raw.title.as_deref()]), normalize(raw.toc));

    println!("{}", render::book_toc(&result, format)?);
    Ok(())
}
