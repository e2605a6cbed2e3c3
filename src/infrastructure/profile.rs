// src/infrastructure/profile.rs
use crate::domain::profile::SiteProfile;
use crate::infrastructure::content::ContentLoadError;
use std::{fs, path::Path};

pub fn load_site_profile(path: impl AsRef<Path>) -> Result<SiteProfile, ContentLoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_site_profile(&json)
}

pub fn parse_site_profile(json: &str) -> Result<SiteProfile, ContentLoadError> {
    let profile: SiteProfile = serde_json::from_str(json)?;
    Ok(profile.validate()?)
}
