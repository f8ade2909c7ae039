//! Output rendering.

use super::OutputFormat;
use shelfmark::{BookMaster, BookToc, Outline};

/// Indented outline, two spaces per level below chapters.
pub fn outline_lines(outline: &Outline) -> String {
    outline
        .iter()
        .map(|node| {
            let indent = "  ".repeat(node.level().saturating_sub(1) as usize);
            format!("{}{}", indent, node.title())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a `{title, toc}` result.
pub fn book_toc(result: &BookToc, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(result),
        OutputFormat::Human => Ok(human(&result.title, None, &result.toc)),
    }
}

/// Render a book record.
pub fn book_master(book: &BookMaster, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(book),
        OutputFormat::Human => Ok(human(book.title(), Some(book.isbn().as_str()), book.toc())),
    }
}

fn human(title: &str, isbn: Option<&str>, toc: &Outline) -> String {
    let mut out = format!("Title: {}\n", title);
    if let Some(isbn) = isbn {
        out.push_str(&format!("ISBN:  {}\n", isbn));
    }
    if toc.is_empty() {
        out.push_str("(no table of contents)");
    } else {
        out.push('\n');
        out.push_str(&outline_lines(toc));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfmark::OutlineNode;

    #[test]
    fn test_outline_lines_indent_by_level() {
        let outline: Outline = [("Ch1", 1), ("1.1", 2), ("1.1.1", 3)]
            .into_iter()
            .map(|(t, l)| OutlineNode::new(t, l).unwrap())
            .collect();

        assert_eq!(outline_lines(&outline), "Ch1\n  1.1\n    1.1.1");
    }

    #[test]
    fn test_human_without_toc() {
        let rendered = book_toc(&BookToc::unknown(), OutputFormat::Human).unwrap();
        assert_eq!(rendered, "Title: Unknown Title\n(no table of contents)");
    }
}
