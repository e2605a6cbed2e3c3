use super::ContentQueryService;
use crate::{
    application::{
        dto::{EntryCardDto, EntryListDto},
        error::ApplicationResult,
    },
    domain::content::{ContentEntry, SelectOptions, select},
};

pub struct ListEntriesQuery {
    pub limit: Option<u32>,
}

impl ContentQueryService {
    /// Full listing, newest first, honouring the draft policy.
    pub async fn list_entries(&self, query: ListEntriesQuery) -> ApplicationResult<EntryListDto> {
        let mut options = SelectOptions::new(self.policy.include_drafts);
        options.limit = query.limit.map(|limit| limit as usize);
        let items = self.select_cards(options).await?;
        Ok(EntryListDto::new(items))
    }

    /// The short list shown on the home page.
    pub async fn recent_entries(&self) -> ApplicationResult<Vec<EntryCardDto>> {
        let options =
            SelectOptions::new(self.policy.include_drafts).with_limit(self.policy.home_limit);
        self.select_cards(options).await
    }

    async fn select_cards(&self, options: SelectOptions) -> ApplicationResult<Vec<EntryCardDto>> {
        let collection = self.repo.collection().await?;
        let selected = select(collection.entries(), &options)?;
        tracing::debug!(
            total = collection.len(),
            selected = selected.len(),
            include_drafts = options.include_drafts,
            "content selected"
        );
        to_cards(&selected)
    }
}

fn to_cards(entries: &[&ContentEntry]) -> ApplicationResult<Vec<EntryCardDto>> {
    entries
        .iter()
        .map(|entry| EntryCardDto::try_from(*entry).map_err(Into::into))
        .collect()
}
