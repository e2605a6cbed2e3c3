// src/infrastructure/content/json.rs
use crate::application::ports::util::SlugGenerator;
use crate::domain::content::{
    ContentCollection, ContentEntry, ContentRepository, EntrySlug, EntryTitle, PublishedAt,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::content::ContentLoadError;
use async_trait::async_trait;
use serde::Deserialize;
use std::{fs, path::Path, sync::Arc};

/// Document shape emitted by the content build step into its generated index.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    #[serde(default)]
    slug: Option<String>,
    title: String,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    draft: bool,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    repo: Option<String>,
    #[serde(default)]
    reading_time: Option<RawReadingTime>,
    #[serde(default, rename = "_raw")]
    raw: Option<RawSource>,
}

#[derive(Debug, Deserialize)]
struct RawReadingTime {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSource {
    #[serde(default)]
    flattened_path: Option<String>,
}

impl RawDocument {
    fn into_entry(self, slugger: &dyn SlugGenerator) -> DomainResult<ContentEntry> {
        let title = EntryTitle::new(self.title)?;
        let slug = match self.slug.filter(|s| !s.trim().is_empty()) {
            Some(slug) => slug,
            None => self
                .raw
                .and_then(|raw| raw.flattened_path)
                .and_then(|path| {
                    let last = path.rsplit('/').next()?.trim().to_string();
                    (!last.is_empty()).then_some(last)
                })
                .unwrap_or_else(|| slugger.slugify(title.as_str())),
        };
        let slug = EntrySlug::new(slug)?;

        // A missing timestamp stays empty so selection reports it against this slug.
        let published_at = PublishedAt::new(self.published_at.unwrap_or_default());

        Ok(ContentEntry::new(slug, title, published_at)
            .with_summary(self.summary.unwrap_or_default())
            .with_draft(self.draft)
            .with_tags(self.tags.unwrap_or_default())
            .with_thumbnail(self.thumbnail)
            .with_repo(self.repo)
            .with_reading_time(self.reading_time.map(|rt| rt.text)))
    }
}

/// Parse a generated content index into a validated collection.
pub fn parse_index(
    json: &str,
    slugger: &dyn SlugGenerator,
) -> Result<ContentCollection, ContentLoadError> {
    let documents: Vec<RawDocument> = serde_json::from_str(json)?;
    let entries = documents
        .into_iter()
        .enumerate()
        .map(|(index, doc)| {
            doc.into_entry(slugger).map_err(|err| match err {
                DomainError::Validation(msg) => {
                    DomainError::Validation(format!("document #{index}: {msg}"))
                }
                other => other,
            })
        })
        .collect::<DomainResult<Vec<_>>>()?;
    Ok(ContentCollection::new(entries)?)
}

/// Content read once from the generated index file and served from memory.
pub struct JsonContentRepository {
    collection: Arc<ContentCollection>,
}

impl JsonContentRepository {
    pub fn load(
        path: impl AsRef<Path>,
        slugger: &dyn SlugGenerator,
    ) -> Result<Self, ContentLoadError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let collection = parse_index(&json, slugger)?;
        tracing::info!(path = %path.display(), entries = collection.len(), "content index loaded");
        Ok(Self {
            collection: Arc::new(collection),
        })
    }
}

#[async_trait]
impl ContentRepository for JsonContentRepository {
    async fn collection(&self) -> DomainResult<Arc<ContentCollection>> {
        Ok(Arc::clone(&self.collection))
    }
}
