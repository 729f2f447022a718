//! GitHub source adapter.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for GitHub API operations
//! - [`client`] - Authenticated client and repository enumeration
//! - [`convert`] - Conversion from octocrab models to [`SourceRepo`](crate::source::SourceRepo)
//!
//! ```ignore
//! use reposync::github::GitHubClient;
//! use reposync::source::{FetchOptions, SourceClient};
//!
//! let client = GitHubClient::new(&token)?;
//! let repos = client.list_repositories(&FetchOptions::default(), None).await?;
//! ```

mod client;
mod convert;
mod error;

pub use client::{GitHubClient, PAGE_SIZE, create_client};
pub use convert::{sort_histogram, to_source_repo};
pub use error::GitHubError;
