//! Serialization tests for the public records.

use shelfmark_core::{BookMaster, BookToc, Isbn, Outline, OutlineNode, UserLibraryEntry};

#[test]
fn test_book_toc_accepts_model_shaped_json() -> anyhow::Result<()> {
    let toc: BookToc = serde_json::from_str(
        r#"{"title": "Rust入門", "toc": [{"title": "第1章", "level": 1}, {"title": "付録"}]}"#,
    )?;

    assert_eq!(toc.toc.len(), 2);
    assert_eq!(toc.toc.nodes()[1].level(), OutlineNode::CHAPTER);
    Ok(())
}

#[test]
fn test_book_toc_rejects_invalid_node() {
    let result: Result<BookToc, _> =
        serde_json::from_str(r#"{"title": "X", "toc": [{"title": "", "level": 1}]}"#);
    assert!(result.is_err());
}

#[test]
fn test_book_master_round_trips_through_json() -> anyhow::Result<()> {
    let toc: Outline = vec![OutlineNode::new("Ch1", 1)?, OutlineNode::new("1.1", 2)?].into();
    let book = BookMaster::new(Isbn::parse("978-4-87311-978-6")?, "Title", toc)?
        .with_last_updated_by("user-1");

    let json = serde_json::to_value(&book)?;
    assert_eq!(json["isbn"], "9784873119786");
    assert_eq!(json["toc"][1]["level"], 2);

    let back: BookMaster = serde_json::from_value(json)?;
    assert_eq!(back, book);
    Ok(())
}

#[test]
fn test_library_entry_rejects_bad_isbn_on_load() {
    let result: Result<UserLibraryEntry, _> = serde_json::from_str(
        r#"{"user_id": "u", "isbn": "12-34", "added_at": "2024-01-01T00:00:00Z"}"#,
    );
    assert!(result.is_err());
}
