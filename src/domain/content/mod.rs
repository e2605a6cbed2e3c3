pub mod entity;
pub mod repository;
pub mod selector;
pub mod specifications;
pub mod value_objects;

pub use entity::{ContentCollection, ContentEntry};
pub use repository::ContentRepository;
pub use selector::{SelectOptions, select};
pub use specifications::VisibleEntrySpec;
pub use value_objects::{EntrySlug, EntryTitle, PublishedAt};
