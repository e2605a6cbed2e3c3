use crate::application::dto::content::EntryCardDto;
use crate::domain::profile::{SiteProfile, Skill, SocialLink};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SocialLinkDto {
    pub label: String,
    pub href: String,
    pub icon: String,
}

impl From<&SocialLink> for SocialLinkDto {
    fn from(link: &SocialLink) -> Self {
        Self {
            label: link.label.clone(),
            href: link.href.clone(),
            icon: link.icon.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SkillDto {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl From<&Skill> for SkillDto {
    fn from(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            icon: skill.icon.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SiteProfileDto {
    pub title: String,
    pub author: String,
    pub headline: String,
    pub description: String,
    pub site_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_banner: Option<String>,
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub socials: Vec<SocialLinkDto>,
    pub skills: Vec<SkillDto>,
    pub copyright_year: i32,
}

impl SiteProfileDto {
    pub fn from_profile(profile: &SiteProfile, copyright_year: i32) -> Self {
        Self {
            title: profile.title.clone(),
            author: profile.author.clone(),
            headline: profile.headline.clone(),
            description: profile.description.clone(),
            site_url: profile.site_url.clone(),
            social_banner: profile.social_banner.clone(),
            keywords: profile.keywords.clone(),
            email: profile.email.clone(),
            socials: profile.socials.iter().map(Into::into).collect(),
            skills: profile.skills.iter().map(Into::into).collect(),
            copyright_year,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomePageDto {
    pub profile: SiteProfileDto,
    pub recent: Vec<EntryCardDto>,
}
