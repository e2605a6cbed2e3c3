use std::sync::Arc;

use crate::application::{dto::SiteProfileDto, ports::time::Clock};
use crate::domain::profile::SiteProfile;

pub struct ProfileQueryService {
    profile: Arc<SiteProfile>,
    clock: Arc<dyn Clock>,
}

impl ProfileQueryService {
    pub fn new(profile: Arc<SiteProfile>, clock: Arc<dyn Clock>) -> Self {
        Self { profile, clock }
    }

    pub fn site_profile(&self) -> SiteProfileDto {
        SiteProfileDto::from_profile(&self.profile, self.clock.current_year())
    }
}
