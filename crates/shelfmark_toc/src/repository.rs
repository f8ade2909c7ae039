//! In-memory repositories.
//!
//! HashMap/Vec stores behind `Arc<RwLock<..>>`. Clones share state, and all
//! data is lost when the last clone is dropped. Used by tests and the CLI.

use async_trait::async_trait;
use shelfmark_core::{BookMaster, Isbn, UserLibraryEntry};
use shelfmark_error::ShelfmarkResult;
use shelfmark_interface::{BookMasterRepository, UserLibraryRepository};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory store of book masters keyed by ISBN.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookMasterRepository {
    books: Arc<RwLock<HashMap<String, BookMaster>>>,
}

impl InMemoryBookMasterRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored books.
    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    /// Whether the repository is empty.
    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[async_trait]
impl BookMasterRepository for InMemoryBookMasterRepository {
    async fn find_by_isbn(&self, isbn: &Isbn) -> ShelfmarkResult<Option<BookMaster>> {
        Ok(self.books.read().await.get(isbn.as_str()).cloned())
    }

    async fn save(&self, book: &BookMaster) -> ShelfmarkResult<()> {
        debug!(isbn = %book.isbn(), "Saving book master");
        self.books
            .write()
            .await
            .insert(book.isbn().as_str().to_string(), book.clone());
        Ok(())
    }
}

/// In-memory store of library entries in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserLibraryRepository {
    entries: Arc<RwLock<Vec<UserLibraryEntry>>>,
}

impl InMemoryUserLibraryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries across all users.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the repository is empty.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl UserLibraryRepository for InMemoryUserLibraryRepository {
    async fn add_book(&self, entry: UserLibraryEntry) -> ShelfmarkResult<UserLibraryEntry> {
        let mut entries = self.entries.write().await;
        if let Some(existing) = entries
            .iter()
            .find(|e| e.user_id() == entry.user_id() && e.isbn() == entry.isbn())
        {
            debug!(user_id = %entry.user_id(), isbn = %entry.isbn(), "Book already in library");
            return Ok(existing.clone());
        }
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn find_by_user(&self, user_id: &str) -> ShelfmarkResult<Vec<UserLibraryEntry>> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .filter(|e| e.user_id() == user_id)
            .cloned()
            .collect())
    }
}
