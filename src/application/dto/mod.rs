pub mod content;
pub mod profile;

pub use content::{EntryCardDto, EntryListDto};
pub use profile::{HomePageDto, SiteProfileDto, SkillDto, SocialLinkDto};
