use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::fmt;

const NAIVE_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntrySlug(String);

impl EntrySlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if trimmed.contains(char::is_whitespace) {
            return Err(DomainError::Validation(format!(
                "slug `{trimmed}` cannot contain whitespace"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntrySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryTitle(String);

impl EntryTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Publication timestamp exactly as the content build step emitted it.
///
/// The text is kept verbatim and only interpreted when an instant is needed, so a
/// bad value surfaces as an error at selection time instead of vanishing at load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedAt(String);

impl PublishedAt {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the raw text as a UTC instant.
    ///
    /// Offsets are honoured; naive date-times and bare dates are taken as UTC,
    /// a bare date meaning midnight.
    pub fn instant(&self) -> Result<DateTime<Utc>, String> {
        let raw = self.0.trim();
        if raw.is_empty() {
            return Err("publication timestamp is empty".into());
        }

        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Ok(parsed.with_timezone(&Utc));
        }

        for format in NAIVE_DATE_TIME_FORMATS {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
                return Ok(parsed.and_utc());
            }
        }

        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight| midnight.and_utc())
            .ok_or_else(|| format!("unrecognised publication timestamp `{raw}`"))
    }
}

impl fmt::Display for PublishedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
