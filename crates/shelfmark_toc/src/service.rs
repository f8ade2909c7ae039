//! Book preview and registration.

use shelfmark_core::{BookMaster, Isbn, Outline, UserLibraryEntry, resolve_title};
use shelfmark_error::ShelfmarkResult;
use shelfmark_interface::{BookMasterRepository, TocGenerator, UserLibraryRepository};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Query sent to the generator for a book that is not stored yet.
///
/// # Examples
///
/// ```
/// use shelfmark_core::Isbn;
/// use shelfmark_toc::preview_query;
///
/// let isbn = Isbn::parse("4873119782").unwrap();
/// assert_eq!(preview_query(&isbn, None), "ISBN: 4873119782");
/// assert_eq!(
///     preview_query(&isbn, Some("Rust入門")),
///     "ISBN: 4873119782 (Title: Rust入門)"
/// );
/// ```
pub fn preview_query(isbn: &Isbn, title: Option<&str>) -> String {
    match title.map(str::trim).filter(|t| !t.is_empty()) {
        Some(title) => format!("ISBN: {} (Title: {})", isbn, title),
        None => format!("ISBN: {}", isbn),
    }
}

/// Looks up a stored book, or generates a tentative one without saving it.
#[derive(Clone)]
pub struct PreviewService {
    books: Arc<dyn BookMasterRepository>,
    generator: Arc<dyn TocGenerator>,
}

impl std::fmt::Debug for PreviewService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewService").finish_non_exhaustive()
    }
}

impl PreviewService {
    /// Create a preview service.
    pub fn new(books: Arc<dyn BookMasterRepository>, generator: Arc<dyn TocGenerator>) -> Self {
        Self { books, generator }
    }

    /// Preview a book by ISBN.
    ///
    /// A stored record is returned as is. Otherwise the generator runs and
    /// the result is returned unsaved, titled with `title` when given.
    ///
    /// # Errors
    ///
    /// Fails on an invalid ISBN or a repository error. Generation problems
    /// never fail; they yield a title-only record.
    #[instrument(skip(self))]
    pub async fn preview(&self, isbn: &str, title: Option<&str>) -> ShelfmarkResult<BookMaster> {
        let isbn = Isbn::parse(isbn)?;

        if let Some(book) = self.books.find_by_isbn(&isbn).await? {
            info!(isbn = %isbn, "Found stored book master");
            return Ok(book);
        }

        let query = preview_query(&isbn, title);
        let result = self.generator.generate_from_query(&query).await;
        let final_title = resolve_title([title, Some(result.title.as_str())]);

        info!(isbn = %isbn, title = %final_title, entries = result.toc.len(), "Built tentative book master");
        Ok(BookMaster::new(isbn, &final_title, result.toc)?)
    }
}

/// Saves a reviewed outline and adds the book to a user's library.
#[derive(Clone)]
pub struct RegisterService {
    books: Arc<dyn BookMasterRepository>,
    library: Arc<dyn UserLibraryRepository>,
}

impl std::fmt::Debug for RegisterService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterService").finish_non_exhaustive()
    }
}

impl RegisterService {
    /// Create a registration service.
    pub fn new(
        books: Arc<dyn BookMasterRepository>,
        library: Arc<dyn UserLibraryRepository>,
    ) -> Self {
        Self { books, library }
    }

    /// Register a book for a user.
    ///
    /// A new record takes `title` (or "Unknown Title"). An existing record
    /// keeps its title and has its outline replaced. The library entry is
    /// added idempotently.
    ///
    /// # Errors
    ///
    /// Fails on an invalid ISBN or a repository error.
    #[instrument(skip(self, toc), fields(entries = toc.len()))]
    pub async fn register(
        &self,
        user_id: &str,
        isbn: &str,
        title: Option<&str>,
        toc: Outline,
    ) -> ShelfmarkResult<(BookMaster, UserLibraryEntry)> {
        let isbn = Isbn::parse(isbn)?;

        let book = match self.books.find_by_isbn(&isbn).await? {
            Some(mut existing) => {
                info!(isbn = %isbn, "Replacing outline of stored book master");
                existing.replace_toc(toc, user_id);
                existing
            }
            None => {
                let title = resolve_title([title]);
                info!(isbn = %isbn, title = %title, "Creating book master");
                BookMaster::new(isbn.clone(), &title, toc)?.with_last_updated_by(user_id)
            }
        };
        self.books.save(&book).await?;

        let entry = self
            .library
            .add_book(UserLibraryEntry::new(user_id, isbn))
            .await?;

        Ok((book, entry))
    }
}

/// Lists the books in a user's library.
#[derive(Clone)]
pub struct ListBooksService {
    books: Arc<dyn BookMasterRepository>,
    library: Arc<dyn UserLibraryRepository>,
}

impl std::fmt::Debug for ListBooksService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListBooksService").finish_non_exhaustive()
    }
}

impl ListBooksService {
    /// Create a listing service.
    pub fn new(
        books: Arc<dyn BookMasterRepository>,
        library: Arc<dyn UserLibraryRepository>,
    ) -> Self {
        Self { books, library }
    }

    /// Each of the user's library entries paired with its book master,
    /// in library order. Entries whose master is missing are skipped.
    ///
    /// # Errors
    ///
    /// Fails on a repository error.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        user_id: &str,
    ) -> ShelfmarkResult<Vec<(BookMaster, UserLibraryEntry)>> {
        let entries = self.library.find_by_user(user_id).await?;
        let mut books = Vec::with_capacity(entries.len());

        for entry in entries {
            match self.books.find_by_isbn(entry.isbn()).await? {
                Some(book) => books.push((book, entry)),
                None => warn!(isbn = %entry.isbn(), "Library entry has no book master, skipping"),
            }
        }

        info!(count = books.len(), "Listed library books");
        Ok(books)
    }
}
