// src/domain/content/entity.rs
use crate::domain::content::value_objects::{EntrySlug, EntryTitle, PublishedAt};
use crate::domain::errors::{DomainError, DomainResult};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct ContentEntry {
    pub slug: EntrySlug,
    pub title: EntryTitle,
    pub summary: String,
    pub published_at: PublishedAt,
    pub draft: bool,
    pub tags: Vec<String>,
    pub thumbnail: Option<String>,
    pub repo: Option<String>,
    pub reading_time: Option<String>,
}

impl ContentEntry {
    pub fn new(slug: EntrySlug, title: EntryTitle, published_at: PublishedAt) -> Self {
        Self {
            slug,
            title,
            summary: String::new(),
            published_at,
            draft: false,
            tags: Vec::new(),
            thumbnail: None,
            repo: None,
            reading_time: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_draft(mut self, draft: bool) -> Self {
        self.draft = draft;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: Option<String>) -> Self {
        self.thumbnail = thumbnail;
        self
    }

    pub fn with_repo(mut self, repo: Option<String>) -> Self {
        self.repo = repo;
        self
    }

    pub fn with_reading_time(mut self, reading_time: Option<String>) -> Self {
        self.reading_time = reading_time;
        self
    }
}

/// A fully materialized set of entries with unique slugs.
#[derive(Debug, Clone, Default)]
pub struct ContentCollection {
    entries: Vec<ContentEntry>,
}

impl ContentCollection {
    pub fn new(entries: Vec<ContentEntry>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.slug.as_str()) {
                return Err(DomainError::Conflict(format!(
                    "duplicate slug `{}` in content collection",
                    entry.slug
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ContentEntry] {
        &self.entries
    }

    pub fn find_by_slug(&self, slug: &EntrySlug) -> Option<&ContentEntry> {
        self.entries.iter().find(|entry| &entry.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
