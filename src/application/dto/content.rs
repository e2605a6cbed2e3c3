use crate::domain::content::ContentEntry;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One entry as a listing card sees it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EntryCardDto {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub published_at: DateTime<Utc>,
    /// Human readable publication date, e.g. "June 1, 2023".
    pub published_on: String,
    pub draft: bool,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<String>,
}

impl TryFrom<&ContentEntry> for EntryCardDto {
    type Error = DomainError;

    fn try_from(entry: &ContentEntry) -> DomainResult<Self> {
        let published_at = entry
            .published_at
            .instant()
            .map_err(|reason| DomainError::malformed_entry(entry.slug.as_str(), reason))?;

        Ok(Self {
            slug: entry.slug.to_string(),
            title: entry.title.to_string(),
            summary: entry.summary.clone(),
            published_at,
            published_on: format_date(published_at),
            draft: entry.draft,
            tags: entry.tags.clone(),
            thumbnail: entry.thumbnail.clone(),
            repo: entry.repo.clone(),
            reading_time: entry.reading_time.clone(),
        })
    }
}

pub fn format_date(instant: DateTime<Utc>) -> String {
    instant.format("%B %-d, %Y").to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EntryListDto {
    pub items: Vec<EntryCardDto>,
    pub total: usize,
}

impl EntryListDto {
    pub fn new(items: Vec<EntryCardDto>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}
