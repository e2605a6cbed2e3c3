use std::sync::Arc;

use crate::domain::content::ContentRepository;

const DEFAULT_HOME_LIMIT: usize = 2;

/// Listing rules fixed once at process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentPolicy {
    pub include_drafts: bool,
    pub home_limit: usize,
}

impl ContentPolicy {
    pub fn for_environment(production: bool) -> Self {
        Self {
            include_drafts: !production,
            home_limit: DEFAULT_HOME_LIMIT,
        }
    }

    pub fn with_home_limit(mut self, home_limit: usize) -> Self {
        self.home_limit = home_limit;
        self
    }
}

pub struct ContentQueryService {
    pub(super) repo: Arc<dyn ContentRepository>,
    pub(super) policy: ContentPolicy,
}

impl ContentQueryService {
    pub fn new(repo: Arc<dyn ContentRepository>, policy: ContentPolicy) -> Self {
        Self { repo, policy }
    }

    pub fn policy(&self) -> ContentPolicy {
        self.policy
    }
}
