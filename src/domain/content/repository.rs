use crate::domain::content::entity::ContentCollection;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Source of the materialized content collection for one render.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn collection(&self) -> DomainResult<Arc<ContentCollection>>;
}
