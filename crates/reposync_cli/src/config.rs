//! Configuration file support for reposync.
//!
//! Configuration is loaded with the following precedence (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (prefixed with `REPOSYNC_`, e.g., `REPOSYNC_NOTION_TOKEN`)
//! 3. Config file (./reposync.toml, then ~/.config/reposync/config.toml)
//! 4. Legacy environment variables (`GITHUB_TOKEN`/`GH_PAT`, `NOTION_TOKEN`,
//!    `NOTION_DATABASE_ID`), used only for values still unset
//! 5. Built-in defaults
//!
//! Example config file:
//! ```toml
//! [github]
//! token = "ghp_..."  # or use REPOSYNC_GITHUB_TOKEN env var
//!
//! [notion]
//! token = "secret_..."  # or use REPOSYNC_NOTION_TOKEN env var
//! database = "0123456789abcdef0123456789abcdef"
//!
//! [sync]
//! timezone = "Asia/Tokyo"
//!
//! [tabular]
//! path = "github_repositories.csv"
//! ```

use std::path::PathBuf;

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use directories::ProjectDirs;
use reposync::settings::{self, DEFAULT_TIME_ZONE, Settings, SettingsError};
use reposync::tabular::DEFAULT_PATH;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub configuration.
    pub github: GitHubConfig,
    /// Notion configuration.
    pub notion: NotionConfig,
    /// Default sync options.
    pub sync: SyncConfig,
    /// CSV file options.
    pub tabular: TabularConfig,
}

/// GitHub configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// GitHub personal access token.
    /// Can also be set via REPOSYNC_GITHUB_TOKEN environment variable.
    pub token: Option<String>,
}

/// Notion configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NotionConfig {
    /// Notion integration token.
    /// Can also be set via REPOSYNC_NOTION_TOKEN environment variable.
    pub token: Option<String>,
    /// Target database id.
    /// Can also be set via REPOSYNC_NOTION_DATABASE environment variable.
    pub database: Option<String>,
}

/// Default sync options.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// IANA zone that timestamps are normalized to.
    pub timezone: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIME_ZONE.name().to_string(),
        }
    }
}

/// CSV file options.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TabularConfig {
    /// Path read by `import` and written by `export`.
    pub path: PathBuf,
}

impl Default for TabularConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
        }
    }
}

/// Values given on the command line, which win over everything else.
#[derive(Debug, Default)]
pub struct Overrides {
    pub timezone: Option<String>,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using the config crate's layered approach.
    ///
    /// Sources are loaded in order (later sources override earlier):
    /// 1. Built-in defaults
    /// 2. XDG config file (~/.config/reposync/config.toml)
    /// 3. Local config file (./reposync.toml)
    /// 4. Environment variables with REPOSYNC_ prefix
    ///
    /// Legacy environment variables are applied afterwards to fill gaps.
    pub fn load() -> Self {
        let mut builder = ConfigBuilder::builder();

        if let Some(proj_dirs) = ProjectDirs::from("", "", "reposync") {
            let xdg_config = proj_dirs.config_dir().join("config.toml");
            if xdg_config.exists() {
                tracing::debug!("Loading config from {:?}", xdg_config);
                builder = builder.add_source(
                    File::from(xdg_config)
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        let local_config = PathBuf::from("reposync.toml");
        if local_config.exists() {
            tracing::debug!("Loading config from ./reposync.toml");
            builder = builder.add_source(
                File::from(local_config)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        // e.g., REPOSYNC_NOTION_DATABASE -> notion.database
        builder = builder.add_source(Environment::with_prefix("REPOSYNC").separator("_"));

        let mut config = match builder.build() {
            Ok(settings) => match settings.try_deserialize::<Config>() {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to deserialize config: {}", e);
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to build config: {}", e);
                Config::default()
            }
        };

        config.apply_legacy_env(|name| std::env::var(name).ok());
        config
    }

    /// Fill unset credentials from the unprefixed variable names.
    pub fn apply_legacy_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if self.github.token.is_none() {
            self.github.token = lookup("GITHUB_TOKEN").or_else(|| lookup("GH_PAT"));
        }
        if self.notion.token.is_none() {
            self.notion.token = lookup("NOTION_TOKEN");
        }
        if self.notion.database.is_none() {
            self.notion.database = lookup("NOTION_DATABASE_ID");
        }
    }

    /// Validate into library settings, applying CLI overrides.
    pub fn settings(&self, overrides: Overrides) -> Result<Settings, SettingsError> {
        let zone_name = overrides
            .timezone
            .unwrap_or_else(|| self.sync.timezone.clone());

        Ok(Settings {
            github_token: self.github.token.clone(),
            notion_token: self.notion.token.clone(),
            notion_database_id: self.notion.database.clone(),
            time_zone: settings::parse_time_zone(&zone_name)?,
            tabular_path: overrides.path.unwrap_or_else(|| self.tabular.path.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_toml(content: &str) -> Config {
        let settings = ConfigBuilder::builder()
            .add_source(config::File::from_str(content, FileFormat::Toml))
            .build()
            .unwrap();
        settings.try_deserialize().unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.github.token.is_none());
        assert!(config.notion.token.is_none());
        assert!(config.notion.database.is_none());
        assert_eq!(config.sync.timezone, "Asia/Tokyo");
        assert_eq!(config.tabular.path, PathBuf::from("github_repositories.csv"));
    }

    #[test]
    fn test_config_builder_with_toml_string() {
        let config = from_toml(
            r#"
            [github]
            token = "ghp_test123"

            [notion]
            token = "secret_abc"
            database = "db123"

            [sync]
            timezone = "UTC"

            [tabular]
            path = "/tmp/repos.csv"
        "#,
        );

        assert_eq!(config.github.token, Some("ghp_test123".to_string()));
        assert_eq!(config.notion.token, Some("secret_abc".to_string()));
        assert_eq!(config.notion.database, Some("db123".to_string()));
        assert_eq!(config.sync.timezone, "UTC");
        assert_eq!(config.tabular.path, PathBuf::from("/tmp/repos.csv"));
    }

    #[test]
    fn test_config_builder_partial_override() {
        let config = from_toml(
            r#"
            [notion]
            database = "db123"
        "#,
        );

        assert_eq!(config.notion.database, Some("db123".to_string()));
        assert!(config.notion.token.is_none());
        assert_eq!(config.sync.timezone, "Asia/Tokyo");
    }

    #[test]
    fn test_legacy_env_fills_only_unset_values() {
        let env = HashMap::from([
            ("GH_PAT", "ghp_legacy"),
            ("NOTION_TOKEN", "secret_legacy"),
            ("NOTION_DATABASE_ID", "db_legacy"),
        ]);
        let mut config = from_toml(
            r#"
            [notion]
            token = "secret_configured"
        "#,
        );

        config.apply_legacy_env(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.github.token, Some("ghp_legacy".to_string()));
        assert_eq!(config.notion.token, Some("secret_configured".to_string()));
        assert_eq!(config.notion.database, Some("db_legacy".to_string()));
    }

    #[test]
    fn test_legacy_github_token_prefers_github_token() {
        let env = HashMap::from([("GITHUB_TOKEN", "ghp_a"), ("GH_PAT", "ghp_b")]);
        let mut config = Config::default();
        config.apply_legacy_env(|name| env.get(name).map(|v| v.to_string()));
        assert_eq!(config.github.token, Some("ghp_a".to_string()));
    }

    #[test]
    fn test_settings_applies_overrides() {
        let config = Config::default();
        let settings = config
            .settings(Overrides {
                timezone: Some("UTC".to_string()),
                path: Some(PathBuf::from("other.csv")),
            })
            .unwrap();
        assert_eq!(settings.time_zone, chrono_tz::UTC);
        assert_eq!(settings.tabular_path, PathBuf::from("other.csv"));
    }

    #[test]
    fn test_settings_rejects_unknown_zone() {
        let config = from_toml(
            r#"
            [sync]
            timezone = "Nowhere/Special"
        "#,
        );
        let err = config.settings(Overrides::default()).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidTimeZone { .. }));
    }
}
