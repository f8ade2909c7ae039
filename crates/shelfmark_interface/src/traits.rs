//! Trait definitions for the pipeline's external collaborators.

use async_trait::async_trait;
use shelfmark_core::{
    BookMaster, BookToc, GenerateRequest, GenerateResponse, Isbn, MetadataHint, UserLibraryEntry,
};
use shelfmark_error::ShelfmarkResult;

/// Backend that turns a prompt into free-form text.
///
/// The returned text is untrusted; callers extract structure from it.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a single-turn request.
    async fn generate(&self, req: &GenerateRequest) -> ShelfmarkResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier.
    fn model_name(&self) -> &str;
}

/// One bibliographic catalog that can be asked about an ISBN.
///
/// Implementations are chained in priority order by the hint resolver.
#[async_trait]
pub trait BibliographicSource: Send + Sync {
    /// Look up an ISBN.
    ///
    /// `Ok(None)` means the source answered but had no record.
    async fn lookup(&self, isbn: &Isbn) -> ShelfmarkResult<Option<MetadataHint>>;

    /// Short source name used in logs.
    fn name(&self) -> &'static str;
}

/// Produces a `{title, toc}` result from a free-form query.
///
/// Implementations degrade instead of failing.
#[async_trait]
pub trait TocGenerator: Send + Sync {
    /// Generate a title and normalized outline for the query.
    async fn generate_from_query(&self, query: &str) -> BookToc;
}

/// Store of canonical per-ISBN book records.
#[async_trait]
pub trait BookMasterRepository: Send + Sync {
    /// Fetch the record for an ISBN, if any.
    async fn find_by_isbn(&self, isbn: &Isbn) -> ShelfmarkResult<Option<BookMaster>>;

    /// Insert or overwrite the record keyed by its ISBN.
    async fn save(&self, book: &BookMaster) -> ShelfmarkResult<()>;
}

/// Store of per-user library entries keyed by user and ISBN.
#[async_trait]
pub trait UserLibraryRepository: Send + Sync {
    /// Add a book to a user's library.
    ///
    /// Idempotent: an existing entry is returned unchanged.
    async fn add_book(&self, entry: UserLibraryEntry) -> ShelfmarkResult<UserLibraryEntry>;

    /// All entries owned by a user, oldest first.
    async fn find_by_user(&self, user_id: &str) -> ShelfmarkResult<Vec<UserLibraryEntry>>;
}
