// src/infrastructure/content/mod.rs
mod json;
mod memory;

pub use json::{JsonContentRepository, parse_index};
pub use memory::InMemoryContentRepository;

use crate::domain::errors::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Domain(#[from] DomainError),
}
