mod get_by_slug;
mod list;
mod service;

pub use get_by_slug::GetEntryBySlugQuery;
pub use list::ListEntriesQuery;
pub use service::{ContentPolicy, ContentQueryService};
