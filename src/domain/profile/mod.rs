// src/domain/profile/mod.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::Deserialize;

/// Static site metadata: bio, social links and the skills list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteProfile {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub description: String,
    pub site_url: String,
    #[serde(default)]
    pub social_banner: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl SiteProfile {
    pub fn validate(self) -> DomainResult<Self> {
        require("title", &self.title)?;
        require("author", &self.author)?;
        require("siteUrl", &self.site_url)?;
        for social in &self.socials {
            require("social label", &social.label)?;
            require("social href", &social.href)?;
        }
        for skill in &self.skills {
            require("skill name", &skill.name)?;
        }
        Ok(self)
    }
}

fn require(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        Err(DomainError::Validation(format!("{field} cannot be empty")))
    } else {
        Ok(())
    }
}
