// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("malformed entry `{slug}`: {reason}")]
    MalformedEntry { slug: String, reason: String },
}

impl DomainError {
    pub fn malformed_entry(slug: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedEntry {
            slug: slug.into(),
            reason: reason.into(),
        }
    }
}
