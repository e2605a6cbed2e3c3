use crate::domain::content::{ContentCollection, ContentRepository};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Serves a collection that was built in process.
#[derive(Clone, Default)]
pub struct InMemoryContentRepository {
    collection: Arc<ContentCollection>,
}

impl InMemoryContentRepository {
    pub fn new(collection: ContentCollection) -> Self {
        Self {
            collection: Arc::new(collection),
        }
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn collection(&self) -> DomainResult<Arc<ContentCollection>> {
        Ok(Arc::clone(&self.collection))
    }
}
