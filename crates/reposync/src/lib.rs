//! Reposync - keep a Notion database in step with your GitHub repositories.
//!
//! Three pipelines share one field mapper and one upsert engine:
//!
//! - **export**: GitHub → CSV ([`sync::export_repositories`])
//! - **import**: CSV → Notion ([`sync::import_tabular`])
//! - **sync**: GitHub → Notion ([`sync::sync_direct`])
//!
//! # Features
//!
//! - `github` - The octocrab-backed [`github::GitHubClient`] source.
//! - `notion` - The reqwest-backed [`notion::NotionClient`] destination.
//!
//! # Example
//!
//! ```ignore
//! use reposync::{github::GitHubClient, notion::NotionClient, sync};
//!
//! let github = GitHubClient::new(settings.require_github_token()?)?;
//! let notion = NotionClient::new(settings.require_notion_token()?)?;
//! let summary = sync::sync_direct(
//!     &github,
//!     &notion,
//!     settings.require_notion_database_id()?,
//!     settings.time_zone,
//!     &sync::SyncOptions::default(),
//!     None,
//! )
//! .await?;
//! ```

pub mod destination;
pub mod http;
pub mod mapping;
pub mod record;
pub mod settings;
pub mod source;
pub mod sync;
pub mod tabular;

#[cfg(feature = "github")]
pub mod github;

#[cfg(feature = "notion")]
pub mod notion;

pub use destination::{Destination, DestinationError, DestinationIndex, DestinationPage};
pub use record::{Privacy, RepositoryRecord, Status};
pub use settings::{Settings, SettingsError};
pub use source::{SourceClient, SourceError, SourceRepo, short_error_message};
pub use sync::{SyncError, SyncOptions, SyncSummary};
