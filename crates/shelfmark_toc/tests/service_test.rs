//! Tests for book preview and registration.

mod test_utils;

use shelfmark_core::{BookMaster, Isbn, UserLibraryEntry};
use shelfmark_error::{ShelfmarkErrorKind, ValidationErrorKind};
use shelfmark_interface::{BookMasterRepository, UserLibraryRepository};
use shelfmark_metadata::HintResolver;
use shelfmark_toc::{
    InMemoryBookMasterRepository, InMemoryUserLibraryRepository, ListBooksService, PreviewService,
    RegisterService, TocPipeline,
};
use std::sync::Arc;
use test_utils::{MockGenerator, outline};

const GENERATED: &str = r#"{"title": "Generated", "toc": [{"title": "Ch1", "level": 1}, {"title": "Ch2", "level": 1}]}"#;

fn preview_service(
    books: &InMemoryBookMasterRepository,
    generator: Arc<MockGenerator>,
) -> PreviewService {
    let pipeline = TocPipeline::new(generator, HintResolver::new(vec![]));
    PreviewService::new(Arc::new(books.clone()), Arc::new(pipeline))
}

#[tokio::test]
async fn test_preview_returns_stored_book_without_generating() -> anyhow::Result<()> {
    let books = InMemoryBookMasterRepository::new();
    let stored = BookMaster::new(Isbn::parse("9784873119786")?, "Stored", outline(&[("S", 1)]))?;
    books.save(&stored).await?;
    let generator = Arc::new(MockGenerator::new_success(GENERATED));
    let service = preview_service(&books, generator.clone());

    let book = service.preview("978-4-87311-978-6", None).await?;

    assert_eq!(book, stored);
    assert_eq!(generator.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_preview_generates_tentative_book() -> anyhow::Result<()> {
    let books = InMemoryBookMasterRepository::new();
    let generator = Arc::new(MockGenerator::new_success(GENERATED));
    let service = preview_service(&books, generator.clone());

    let book = service.preview("9784873119786", None).await?;

    assert_eq!(book.title(), "Generated");
    assert_eq!(book.toc(), &outline(&[("Ch1", 1), ("Ch2", 1)]));
    assert!(books.is_empty().await, "preview must not save");

    let request = generator.last_request().expect("generator called");
    assert!(request.prompt().contains("\"ISBN: 9784873119786\""));
    Ok(())
}

#[tokio::test]
async fn test_preview_explicit_title_wins() -> anyhow::Result<()> {
    let books = InMemoryBookMasterRepository::new();
    let generator = Arc::new(MockGenerator::new_success(GENERATED));
    let service = preview_service(&books, generator.clone());

    let book = service.preview("9784873119786", Some("My Title")).await?;

    assert_eq!(book.title(), "My Title");
    let request = generator.last_request().expect("generator called");
    assert!(
        request
            .prompt()
            .contains("ISBN: 9784873119786 (Title: My Title)")
    );
    Ok(())
}

#[tokio::test]
async fn test_preview_rejects_invalid_isbn() -> anyhow::Result<()> {
    let books = InMemoryBookMasterRepository::new();
    let generator = Arc::new(MockGenerator::new_success(GENERATED));
    let service = preview_service(&books, generator.clone());

    let err = service.preview("12345", None).await.unwrap_err();

    match err.kind() {
        ShelfmarkErrorKind::Validation(e) => {
            assert_eq!(e.kind, ValidationErrorKind::InvalidIsbnLength(5))
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(generator.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_register_creates_book_and_entry() -> anyhow::Result<()> {
    let books = InMemoryBookMasterRepository::new();
    let library = InMemoryUserLibraryRepository::new();
    let service = RegisterService::new(Arc::new(books.clone()), Arc::new(library.clone()));

    let (book, entry) = service
        .register("user-1", "978-4-87311-978-6", None, outline(&[("Ch1", 1)]))
        .await?;

    assert_eq!(book.title(), "Unknown Title");
    assert_eq!(book.last_updated_by().as_deref(), Some("user-1"));
    assert_eq!(entry.isbn().as_str(), "9784873119786");
    assert!(books.find_by_isbn(entry.isbn()).await?.is_some());
    assert_eq!(library.find_by_user("user-1").await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_register_existing_replaces_toc_and_keeps_title() -> anyhow::Result<()> {
    let books = InMemoryBookMasterRepository::new();
    let library = InMemoryUserLibraryRepository::new();
    let service = RegisterService::new(Arc::new(books.clone()), Arc::new(library.clone()));

    service
        .register("user-1", "9784873119786", Some("Original"), outline(&[("Old", 1)]))
        .await?;
    let (book, _) = service
        .register("user-2", "9784873119786", Some("Ignored"), outline(&[("New", 1)]))
        .await?;

    assert_eq!(book.title(), "Original");
    assert_eq!(book.toc(), &outline(&[("New", 1)]));
    assert_eq!(book.last_updated_by().as_deref(), Some("user-2"));
    assert_eq!(books.len().await, 1);
    assert_eq!(library.len().await, 2);
    Ok(())
}

#[tokio::test]
async fn test_register_is_idempotent_for_library_entry() -> anyhow::Result<()> {
    let books = InMemoryBookMasterRepository::new();
    let library = InMemoryUserLibraryRepository::new();
    let service = RegisterService::new(Arc::new(books), Arc::new(library.clone()));

    let (_, first) = service
        .register("user-1", "9784873119786", None, outline(&[("Ch1", 1)]))
        .await?;
    let (_, second) = service
        .register("user-1", "9784873119786", None, outline(&[("Ch1", 1)]))
        .await?;

    assert_eq!(first, second);
    assert_eq!(library.find_by_user("user-1").await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_list_pairs_entries_with_masters_and_skips_missing() -> anyhow::Result<()> {
    let books = InMemoryBookMasterRepository::new();
    let library = InMemoryUserLibraryRepository::new();
    let register = RegisterService::new(Arc::new(books.clone()), Arc::new(library.clone()));
    let list = ListBooksService::new(Arc::new(books.clone()), Arc::new(library.clone()));

    register
        .register("user-1", "9784873119786", Some("Registered"), outline(&[("Ch1", 1)]))
        .await?;
    // Entry without a stored master
    library
        .add_book(UserLibraryEntry::new("user-1", Isbn::parse("4774198706")?))
        .await?;
    register
        .register("user-2", "9784297141738", Some("Someone Else"), outline(&[]))
        .await?;

    let listed = list.list("user-1").await?;

    assert_eq!(listed.len(), 1);
    let (book, entry) = &listed[0];
    assert_eq!(book.title(), "Registered");
    assert_eq!(entry.isbn(), book.isbn());
    assert_eq!(entry.user_id(), "user-1");
    Ok(())
}

#[tokio::test]
async fn test_list_empty_library() -> anyhow::Result<()> {
    let list = ListBooksService::new(
        Arc::new(InMemoryBookMasterRepository::new()),
        Arc::new(InMemoryUserLibraryRepository::new()),
    );

    assert!(list.list("nobody").await?.is_empty());
    Ok(())
}
