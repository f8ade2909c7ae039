//! Pull a structured outline out of untrusted model text.
//!
//! Model answers often wrap the requested JSON in prose or markdown fences,
//! or trail commentary after it. Extraction finds the first `{`, parses one
//! JSON value from there, and only then falls back to the greedy span up to
//! the last `}`.

use serde_json::{Map, Value};
use shelfmark_core::{Outline, OutlineNode};
use shelfmark_error::{ExtractionError, ExtractionErrorKind};
use tracing::{debug, warn};

/// Title and outline as the model reported them, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawBookOutline {
    /// Title string, if the model supplied a non-blank one
    pub title: Option<String>,
    /// Entries that passed validation, in document order
    pub toc: Outline,
}

/// Extract the first JSON object from a model response.
///
/// # Errors
///
/// - `NoOpeningBrace` when the text has no `{`
/// - `Unparseable` when neither the first value nor the greedy span parses
/// - `NotAnObject` when the parsed value is not an object
///
/// # Examples
///
/// ```
/// use shelfmark_toc::extract_json_object;
///
/// let response = "Here you go:\n```json\n{\"title\": \"X\", \"toc\": []}\n```\nEnjoy!";
/// let value = extract_json_object(response).unwrap();
/// assert_eq!(value["title"], "X");
/// ```
pub fn extract_json_object(response: &str) -> Result<Value, ExtractionError> {
    let Some(start) = response.find('{') else {
        warn!(
            response_length = response.len(),
            "No JSON opening brace in response"
        );
        return Err(ExtractionError::new(ExtractionErrorKind::NoOpeningBrace(
            response.len(),
        )));
    };

    let tail = &response[start..];
    let value = match serde_json::Deserializer::from_str(tail)
        .into_iter::<Value>()
        .next()
    {
        Some(Ok(value)) => value,
        first_err => {
            debug!(
                error = ?first_err.and_then(Result::err).map(|e| e.to_string()),
                "First-value parse failed, trying greedy span"
            );
            parse_greedy_span(tail)?
        }
    };

    if value.is_object() {
        Ok(value)
    } else {
        Err(ExtractionError::new(ExtractionErrorKind::NotAnObject))
    }
}

/// Parse everything from the first `{` to the last `}`.
fn parse_greedy_span(tail: &str) -> Result<Value, ExtractionError> {
    let end = tail.rfind('}').ok_or_else(|| {
        ExtractionError::new(ExtractionErrorKind::Unparseable(
            "no closing brace".to_string(),
        ))
    })?;

    serde_json::from_str(&tail[..=end]).map_err(|e| {
        warn!(error = %e, "Greedy JSON span failed to parse");
        ExtractionError::new(ExtractionErrorKind::Unparseable(e.to_string()))
    })
}

/// Read `title` and `toc` from an extracted object.
///
/// Toc entries are kept when they are objects with a non-blank `title` and a
/// positive integer `level`. A missing level means a chapter, and integral
/// strings such as `"2"` are accepted. Anything else is skipped.
///
/// # Errors
///
/// Returns `NotAnObject` if `value` is not a JSON object.
pub fn parse_book_outline(value: &Value) -> Result<RawBookOutline, ExtractionError> {
    let object = value
        .as_object()
        .ok_or_else(|| ExtractionError::new(ExtractionErrorKind::NotAnObject))?;

    let title = object
        .get("title")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    let toc = match object.get("toc") {
        Some(Value::Array(entries)) => entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| parse_entry(index, entry))
            .collect(),
        Some(Value::Null) | None => Outline::default(),
        Some(other) => {
            warn!(kind = json_kind(other), "toc is not an array, ignoring it");
            Outline::default()
        }
    };

    Ok(RawBookOutline { title, toc })
}

/// Extract and parse in one step.
///
/// # Errors
///
/// Any [`extract_json_object`] failure.
pub fn extract_book_outline(response: &str) -> Result<RawBookOutline, ExtractionError> {
    parse_book_outline(&extract_json_object(response)?)
}

fn parse_entry(index: usize, entry: &Value) -> Option<OutlineNode> {
    let Some(fields) = entry.as_object() else {
        warn!(index, kind = json_kind(entry), "Skipping non-object toc entry");
        return None;
    };

    let Some(title) = fields.get("title").and_then(Value::as_str) else {
        warn!(index, "Skipping toc entry without a title");
        return None;
    };

    let Some(level) = entry_level(fields) else {
        warn!(index, title, "Skipping toc entry with an invalid level");
        return None;
    };

    match OutlineNode::new(title, level) {
        Ok(node) => Some(node),
        Err(e) => {
            warn!(index, error = %e, "Skipping invalid toc entry");
            None
        }
    }
}

fn entry_level(fields: &Map<String, Value>) -> Option<u32> {
    match fields.get("level") {
        None | Some(Value::Null) => Some(OutlineNode::CHAPTER),
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        Some(_) => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_from_code_fence() {
        let response = "```json\n{\"title\":\"X\",\"toc\":[{\"title\":\"A\",\"level\":1}]}\n```";
        let value = extract_json_object(response).unwrap();
        assert_eq!(value["title"], "X");
        assert_eq!(value["toc"][0]["title"], "A");
    }

    #[test]
    fn test_extract_ignores_trailing_text() {
        let response = "{\"title\":\"X\",\"toc\":[]} and also {\"other\": true}";
        let value = extract_json_object(response).unwrap();
        assert_eq!(value, json!({"title": "X", "toc": []}));
    }

    #[test]
    fn test_extract_without_brace_fails() {
        let err = extract_json_object("I could not find this book.").unwrap_err();
        assert_eq!(err.kind, ExtractionErrorKind::NoOpeningBrace(27));
    }

    #[test]
    fn test_extract_stray_brace_is_unparseable() {
        // The first-value parse and the greedy span both start at the stray brace.
        let response = "Use {braces} like this: {\"title\": \"X\"}";
        let err = extract_json_object(response).unwrap_err();
        assert!(matches!(err.kind, ExtractionErrorKind::Unparseable(_)));
    }

    #[test]
    fn test_extract_truncated_object_is_unparseable() {
        let err = extract_json_object("{\"title\": \"X\", \"toc\": [").unwrap_err();
        assert!(matches!(err.kind, ExtractionErrorKind::Unparseable(_)));
    }

    #[test]
    fn test_parse_outline_entries() {
        let value = json!({
            "title": "  Rust入門  ",
            "toc": [
                {"title": "第1章 はじめに", "level": 1},
                {"title": "1.1 インストール", "level": "2"},
                {"title": "付録"},
                {"title": "", "level": 1},
                {"title": "Bad level", "level": 0},
                {"title": "Negative", "level": -1},
                "not an object",
                {"level": 2}
            ]
        });

        let raw = parse_book_outline(&value).unwrap();

        assert_eq!(raw.title.as_deref(), Some("Rust入門"));
        let nodes: Vec<(&str, u32)> = raw.toc.iter().map(|n| (n.title(), n.level())).collect();
        assert_eq!(
            nodes,
            vec![
                ("第1章 はじめに", 1),
                ("1.1 インストール", 2),
                ("付録", 1)
            ]
        );
    }

    #[test]
    fn test_parse_outline_missing_fields() {
        let raw = parse_book_outline(&json!({"title": "   "})).unwrap();
        assert_eq!(raw, RawBookOutline::default());

        let raw = parse_book_outline(&json!({"toc": "chapter one"})).unwrap();
        assert!(raw.toc.is_empty());
    }

    #[test]
    fn test_parse_outline_rejects_non_object() {
        let err = parse_book_outline(&json!([1, 2])).unwrap_err();
        assert_eq!(err.kind, ExtractionErrorKind::NotAnObject);
    }
}
