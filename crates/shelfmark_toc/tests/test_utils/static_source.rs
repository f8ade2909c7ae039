//! Fake bibliographic source.

use async_trait::async_trait;
use shelfmark_core::{Isbn, MetadataHint};
use shelfmark_error::{MetadataError, MetadataErrorKind, ShelfmarkResult};
use shelfmark_interface::BibliographicSource;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Canned answer for a fake source.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Answer {
    /// A hint with this title and these authors
    Hint(&'static str, Vec<&'static str>),
    /// No record
    Nothing,
    /// Source failure
    Fail,
}

/// Source that returns a fixed answer and counts lookups.
pub struct StaticSource {
    answer: Answer,
    calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl StaticSource {
    /// Boxed source plus a handle on its call counter.
    pub fn boxed(answer: Answer) -> (Box<dyn BibliographicSource>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = Self {
            answer,
            calls: calls.clone(),
        };
        (Box::new(source), calls)
    }
}

#[async_trait]
impl BibliographicSource for StaticSource {
    async fn lookup(&self, _isbn: &Isbn) -> ShelfmarkResult<Option<MetadataHint>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.answer {
            Answer::Hint(title, authors) => Ok(Some(
                MetadataHint::builder()
                    .title(*title)
                    .authors(authors.iter().map(|a| a.to_string()).collect::<Vec<_>>())
                    .build()
                    .expect("hint builds"),
            )),
            Answer::Nothing => Ok(None),
            Answer::Fail => Err(MetadataError::new(MetadataErrorKind::Status {
                source_name: "static".to_string(),
                status_code: 500,
            })
            .into()),
        }
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
