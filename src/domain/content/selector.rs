// src/domain/content/selector.rs
use crate::domain::content::entity::ContentEntry;
use crate::domain::content::specifications::VisibleEntrySpec;
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectOptions {
    pub limit: Option<usize>,
    pub include_drafts: bool,
}

impl SelectOptions {
    pub fn new(include_drafts: bool) -> Self {
        Self {
            limit: None,
            include_drafts,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Order `entries` newest first, hide drafts unless allowed, and cap the result.
///
/// Every entry's timestamp is checked, including drafts that end up filtered out;
/// the first one that cannot be read fails the whole call. Entries with identical
/// instants keep their input order.
pub fn select<'a>(
    entries: &'a [ContentEntry],
    options: &SelectOptions,
) -> DomainResult<Vec<&'a ContentEntry>> {
    let visible = VisibleEntrySpec::new(options.include_drafts);

    let mut keyed = Vec::with_capacity(entries.len());
    for entry in entries {
        let instant = entry
            .published_at
            .instant()
            .map_err(|reason| DomainError::malformed_entry(entry.slug.as_str(), reason))?;
        if visible.is_satisfied_by(entry) {
            keyed.push((instant, entry));
        }
    }

    // slice::sort_by is stable
    keyed.sort_by(|(a, _), (b, _)| b.cmp(a));

    let take = options.limit.unwrap_or(keyed.len());
    Ok(keyed.into_iter().take(take).map(|(_, entry)| entry).collect())
}
