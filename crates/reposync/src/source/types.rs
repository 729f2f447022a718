use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::sync::ProgressCallback;

use super::errors::Result;

/// Bytes of code per language, largest first.
pub type LanguageHistogram = Vec<(String, u64)>;

/// A repository as reported by the source platform, before mapping.
#[derive(Debug, Clone, Default)]
pub struct SourceRepo {
    /// Repository name.
    pub name: String,
    /// Owner login.
    pub owner: String,
    /// Repository description.
    pub description: Option<String>,
    /// Web URL.
    pub html_url: Option<String>,
    /// Whether the repository is archived.
    pub is_archived: bool,
    /// Whether the repository is private.
    pub is_private: bool,
    /// Primary language.
    pub language: Option<String>,
    /// Per-language histogram, when it was requested.
    pub languages: Option<LanguageHistogram>,
    /// When code was last pushed.
    pub pushed_at: Option<DateTime<Utc>>,
    /// When the repository was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

impl SourceRepo {
    /// Get the full name (owner/name).
    #[inline]
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Options for enumerating repositories.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Fetch the per-language histogram for every repository.
    /// Costs one extra request per repository.
    pub include_languages: bool,
}

/// Trait for source platform clients.
///
/// Implementors handle pagination internally and return the complete,
/// source-ordered list of repositories visible to the authenticated principal.
#[async_trait]
pub trait SourceClient: Send + Sync {
    /// Short platform name for progress output.
    fn platform_name(&self) -> &'static str;

    /// List every repository of the authenticated principal.
    async fn list_repositories(
        &self,
        options: &FetchOptions,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<Vec<SourceRepo>>;
}
