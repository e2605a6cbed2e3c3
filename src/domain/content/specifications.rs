use crate::domain::content::entity::ContentEntry;

/// Whether an entry may be shown to a viewer under the current draft policy.
pub struct VisibleEntrySpec {
    include_drafts: bool,
}

impl VisibleEntrySpec {
    pub fn new(include_drafts: bool) -> Self {
        Self { include_drafts }
    }

    pub fn is_satisfied_by(&self, entry: &ContentEntry) -> bool {
        self.include_drafts || !entry.draft
    }
}
