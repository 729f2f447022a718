//! Validated run settings.
//!
//! Built once at startup by the CLI and passed by reference into the
//! pipelines. Credentials are optional here because each pipeline needs a
//! different subset; the `require_*` accessors turn an absent value into a
//! [`SettingsError::Missing`] naming it.

use std::path::PathBuf;

use chrono_tz::Tz;
use thiserror::Error;

use crate::tabular::DEFAULT_PATH;

/// Default zone for normalized timestamps.
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::Asia::Tokyo;

/// Errors raised while validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Missing required configuration value: {name}")]
    Missing { name: &'static str },

    #[error("Invalid time zone: {value}")]
    InvalidTimeZone { value: String },
}

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub github_token: Option<String>,
    pub notion_token: Option<String>,
    pub notion_database_id: Option<String>,
    pub time_zone: Tz,
    pub tabular_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            github_token: None,
            notion_token: None,
            notion_database_id: None,
            time_zone: DEFAULT_TIME_ZONE,
            tabular_path: PathBuf::from(DEFAULT_PATH),
        }
    }
}

fn require<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str, SettingsError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(SettingsError::Missing { name })
}

impl Settings {
    /// GitHub personal access token.
    pub fn require_github_token(&self) -> Result<&str, SettingsError> {
        require(&self.github_token, "GITHUB_TOKEN")
    }

    /// Notion integration token.
    pub fn require_notion_token(&self) -> Result<&str, SettingsError> {
        require(&self.notion_token, "NOTION_TOKEN")
    }

    /// Target Notion database id.
    pub fn require_notion_database_id(&self) -> Result<&str, SettingsError> {
        require(&self.notion_database_id, "NOTION_DATABASE_ID")
    }
}

/// Parse an IANA zone name such as `Asia/Tokyo`.
pub fn parse_time_zone(value: &str) -> Result<Tz, SettingsError> {
    value
        .trim()
        .parse::<Tz>()
        .map_err(|_| SettingsError::InvalidTimeZone {
            value: value.to_string(),
        })
}
