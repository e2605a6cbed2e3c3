// src/config.rs
use crate::application::queries::content::ContentPolicy;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    content_index_path: String,
    site_profile_path: String,
    production: bool,
    home_entry_limit: usize,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_content_index_path() -> String {
    ".contentlayer/generated/Blog/_index.json".into()
}

fn default_site_profile_path() -> String {
    "content/site.json".into()
}

fn default_home_entry_limit() -> usize {
    2
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from process environment variables, falling back
    /// to defaults for anything unset. Loading `.env` is the caller's job.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads keys through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let content_index_path =
            lookup("CONTENT_INDEX_PATH").unwrap_or_else(default_content_index_path);
        let site_profile_path =
            lookup("SITE_PROFILE_PATH").unwrap_or_else(default_site_profile_path);

        let production = lookup("APP_ENV")
            .or_else(|| lookup("NODE_ENV"))
            .map(|v| v.trim().eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let home_entry_limit = match lookup("HOME_ENTRY_LIMIT") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                ConfigError::Invalid(format!(
                    "HOME_ENTRY_LIMIT must be a non-negative integer, got `{raw}`"
                ))
            })?,
            None => default_home_entry_limit(),
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        if content_index_path.trim().is_empty() {
            return Err(ConfigError::Missing("CONTENT_INDEX_PATH"));
        }

        Ok(Self {
            listen_addr,
            content_index_path,
            site_profile_path,
            production,
            home_entry_limit,
            allowed_origins,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn content_index_path(&self) -> &str {
        &self.content_index_path
    }

    pub fn site_profile_path(&self) -> &str {
        &self.site_profile_path
    }

    pub fn is_production(&self) -> bool {
        self.production
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// Draft visibility and home listing size, fixed for the life of the process.
    pub fn content_policy(&self) -> ContentPolicy {
        ContentPolicy::for_environment(self.production).with_home_limit(self.home_entry_limit)
    }
}
