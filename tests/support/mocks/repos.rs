// tests/support/mocks/repos.rs
use async_trait::async_trait;
use folio_core::domain::content::{ContentCollection, ContentRepository};
use folio_core::domain::errors::{DomainError, DomainResult};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Repository whose source is unavailable.
pub struct FailingContentRepo;

#[async_trait]
impl ContentRepository for FailingContentRepo {
    async fn collection(&self) -> DomainResult<Arc<ContentCollection>> {
        Err(DomainError::NotFound("content index unavailable".into()))
    }
}

/// Serves a fixed collection and counts how often it was asked.
pub struct CountingContentRepo {
    collection: Arc<ContentCollection>,
    calls: AtomicUsize,
}

impl CountingContentRepo {
    pub fn new(collection: ContentCollection) -> Self {
        Self {
            collection: Arc::new(collection),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentRepository for CountingContentRepo {
    async fn collection(&self) -> DomainResult<Arc<ContentCollection>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::clone(&self.collection))
    }
}
