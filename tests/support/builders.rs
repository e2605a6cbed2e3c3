// tests/support/builders.rs
use folio_core::domain::content::{
    ContentCollection, ContentEntry, EntrySlug, EntryTitle, PublishedAt,
};

pub struct EntryBuilder {
    slug: String,
    title: String,
    published_at: String,
    draft: bool,
    tags: Vec<String>,
    thumbnail: Option<String>,
}

impl EntryBuilder {
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            title: slug.replace('-', " "),
            slug,
            published_at: "2023-01-01".into(),
            draft: false,
            tags: Vec::new(),
            thumbnail: None,
        }
    }

    pub fn published_at(mut self, published_at: impl Into<String>) -> Self {
        self.published_at = published_at.into();
        self
    }

    pub fn draft(mut self) -> Self {
        self.draft = true;
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn build(self) -> ContentEntry {
        ContentEntry::new(
            EntrySlug::new(self.slug).expect("valid slug"),
            EntryTitle::new(self.title).expect("valid title"),
            PublishedAt::new(self.published_at),
        )
        .with_summary("summary")
        .with_draft(self.draft)
        .with_tags(self.tags)
        .with_thumbnail(self.thumbnail)
    }
}

pub fn collection(entries: Vec<ContentEntry>) -> ContentCollection {
    ContentCollection::new(entries).expect("unique slugs")
}

/// Four entries across three months plus one draft, newest draft first in time.
pub fn sample_entries() -> Vec<ContentEntry> {
    vec![
        EntryBuilder::new("january").published_at("2023-01-10").build(),
        EntryBuilder::new("june").published_at("2023-06-01T08:00:00Z").tag("Rust").build(),
        EntryBuilder::new("draft-july").published_at("2023-07-01").draft().build(),
        EntryBuilder::new("march").published_at("2023-03-15").build(),
        EntryBuilder::new("june-evening").published_at("2023-06-01T20:00:00Z").build(),
    ]
}
