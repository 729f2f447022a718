//! GitHub API client for enumerating the authenticated user's repositories.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use octocrab::Octocrab;
use octocrab::models::Repository as GitHubRepo;

use super::convert::{sort_histogram, to_source_repo};
use super::error::GitHubError;
use crate::source::{self, FetchOptions, LanguageHistogram, SourceClient, SourceError, SourceRepo};
use crate::sync::{ProgressCallback, SyncProgress, emit};

/// Repositories requested per page.
pub const PAGE_SIZE: usize = 100;

/// Create an authenticated Octocrab instance from a GitHub token.
pub fn create_client(token: &str) -> Result<Octocrab, GitHubError> {
    Octocrab::builder()
        .personal_token(token.to_string())
        .build()
        .map_err(GitHubError::Api)
}

/// GitHub API client.
#[derive(Clone)]
pub struct GitHubClient {
    inner: Arc<Octocrab>,
}

impl GitHubClient {
    /// Create a new GitHub client from a personal access token.
    pub fn new(token: &str) -> Result<Self, GitHubError> {
        let client = create_client(token)?;
        Ok(Self::from_octocrab(client))
    }

    /// Wrap an already configured Octocrab instance.
    pub fn from_octocrab(client: Octocrab) -> Self {
        Self {
            inner: Arc::new(client),
        }
    }

    /// Fetch one page of the authenticated user's repositories.
    ///
    /// `GET /user/repos` covers owned, collaborator and organization
    /// repositories, private ones included.
    async fn list_page(&self, page: u32) -> Result<Vec<GitHubRepo>, GitHubError> {
        let route = format!("/user/repos?per_page={}&page={}", PAGE_SIZE, page);
        let repos: Vec<GitHubRepo> = self.inner.get(&route, None::<&()>).await?;
        Ok(repos)
    }

    /// Fetch the per-language byte histogram of a repository.
    pub async fn get_languages(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<LanguageHistogram, GitHubError> {
        let route = format!("/repos/{}/{}/languages", owner, name);
        let raw: HashMap<String, u64> = self.inner.get(&route, None::<&()>).await?;
        Ok(sort_histogram(raw))
    }
}

#[async_trait]
impl SourceClient for GitHubClient {
    fn platform_name(&self) -> &'static str {
        "GitHub"
    }

    async fn list_repositories(
        &self,
        options: &FetchOptions,
        on_progress: Option<&ProgressCallback>,
    ) -> source::Result<Vec<SourceRepo>> {
        emit(
            on_progress,
            SyncProgress::FetchingRepos {
                source: self.platform_name().to_string(),
            },
        );

        let mut all_repos: Vec<SourceRepo> = Vec::new();
        let mut page = 1u32;

        loop {
            let repos = self.list_page(page).await.map_err(SourceError::from)?;
            let count = repos.len();
            all_repos.extend(repos.iter().map(to_source_repo));

            emit(
                on_progress,
                SyncProgress::FetchedPage {
                    page,
                    count,
                    total_so_far: all_repos.len(),
                },
            );

            // A short page is the last one
            if count < PAGE_SIZE {
                break;
            }
            page += 1;
        }

        if options.include_languages {
            let total = all_repos.len();
            emit(on_progress, SyncProgress::FetchingLanguages { total });
            for repo in &mut all_repos {
                let histogram = self
                    .get_languages(&repo.owner, &repo.name)
                    .await
                    .map_err(SourceError::from)?;
                tracing::debug!(
                    repo = %repo.full_name(),
                    languages = histogram.len(),
                    "Fetched language histogram"
                );
                repo.languages = Some(histogram);
            }
        }

        emit(
            on_progress,
            SyncProgress::FetchComplete {
                total: all_repos.len(),
            },
        );

        Ok(all_repos)
    }
}
