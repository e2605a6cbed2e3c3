use super::ContentQueryService;
use crate::{
    application::{
        dto::EntryCardDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::content::{EntrySlug, VisibleEntrySpec},
};

pub struct GetEntryBySlugQuery {
    pub slug: String,
}

impl ContentQueryService {
    pub async fn get_entry_by_slug(
        &self,
        query: GetEntryBySlugQuery,
    ) -> ApplicationResult<EntryCardDto> {
        let slug = EntrySlug::new(query.slug)?;
        let collection = self.repo.collection().await?;
        let visible = VisibleEntrySpec::new(self.policy.include_drafts);

        let entry = collection
            .find_by_slug(&slug)
            .filter(|entry| visible.is_satisfied_by(entry))
            .ok_or_else(|| ApplicationError::not_found(format!("entry `{slug}` not found")))?;

        Ok(EntryCardDto::try_from(entry)?)
    }
}
