// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        dto::HomePageDto,
        ports::time::Clock,
        queries::{
            content::{ContentPolicy, ContentQueryService},
            profile::ProfileQueryService,
        },
    },
    domain::{
        content::{ContentRepository, SelectOptions, select},
        profile::SiteProfile,
    },
};

pub struct ApplicationServices {
    pub content_queries: Arc<ContentQueryService>,
    pub profile_queries: Arc<ProfileQueryService>,
    content_repo: Arc<dyn ContentRepository>,
}

impl ApplicationServices {
    pub fn new(
        content_repo: Arc<dyn ContentRepository>,
        site_profile: Arc<SiteProfile>,
        clock: Arc<dyn Clock>,
        policy: ContentPolicy,
    ) -> Self {
        let content_queries = Arc::new(ContentQueryService::new(
            Arc::clone(&content_repo),
            policy,
        ));
        let profile_queries = Arc::new(ProfileQueryService::new(site_profile, clock));

        Self {
            content_queries,
            profile_queries,
            content_repo,
        }
    }

    pub async fn home_page(&self) -> ApplicationResult<HomePageDto> {
        let recent = self.content_queries.recent_entries().await?;
        Ok(HomePageDto {
            profile: self.profile_queries.site_profile(),
            recent,
        })
    }

    /// Run one full selection over the collection so a bad timestamp stops
    /// startup instead of breaking a listing later. Returns the visible count.
    pub async fn preflight(&self) -> ApplicationResult<usize> {
        let collection = self.content_repo.collection().await?;
        let options = SelectOptions::new(self.content_queries.policy().include_drafts);
        Ok(select(collection.entries(), &options)?.len())
    }
}
