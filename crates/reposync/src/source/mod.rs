//! Source platform abstraction.
//!
//! The direct syncer and the exporter read repositories through the
//! [`SourceClient`] trait so the pipeline does not depend on a concrete
//! platform client.
//!
//! # Example
//!
//! ```ignore
//! use reposync::source::{FetchOptions, SourceClient};
//!
//! async fn names<C: SourceClient>(client: &C) -> Result<Vec<String>, SourceError> {
//!     let repos = client.list_repositories(&FetchOptions::default(), None).await?;
//!     Ok(repos.into_iter().map(|r| r.name).collect())
//! }
//! ```

mod errors;
mod types;

pub use errors::{Result, SourceError, short_error_message};
pub use types::{FetchOptions, LanguageHistogram, SourceClient, SourceRepo};
