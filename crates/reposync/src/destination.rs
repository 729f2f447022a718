//! Destination database abstraction.
//!
//! The upsert engine talks to the destination only through [`Destination`],
//! so tests can drive it with an in-memory fake and the Notion adapter stays
//! an implementation detail.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use crate::mapping::{PropertyBag, title_of};

/// Errors raised by destination operations.
#[derive(Debug, Error)]
pub enum DestinationError {
    /// The destination rejected the request.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Authentication required or failed.
    #[error("Authentication required")]
    AuthRequired,

    /// Database or page not found.
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    /// Network or connection error.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Unexpected/internal error.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DestinationError {
    /// Create an API error.
    #[inline]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

/// Result type for destination operations.
pub type Result<T> = std::result::Result<T, DestinationError>;

/// An existing destination page: opaque id plus its property bag.
#[derive(Debug, Clone)]
pub struct DestinationPage {
    pub id: String,
    pub properties: PropertyBag,
}

impl DestinationPage {
    /// The page's title text, if any.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        title_of(&self.properties)
    }
}

/// Query/create/update primitives of a destination database.
#[async_trait]
pub trait Destination: Send + Sync {
    /// Return every page in the collection. Implementations must follow
    /// pagination to completion.
    async fn query_all(&self, collection_id: &str) -> Result<Vec<DestinationPage>>;

    /// Create a page under the collection, returning the new page id.
    async fn create(&self, collection_id: &str, properties: &PropertyBag) -> Result<String>;

    /// Replace the given properties on an existing page.
    async fn update(&self, page_id: &str, properties: &PropertyBag) -> Result<()>;
}

/// Name-to-page-id lookup built once per run from the destination's state.
///
/// Read-only after construction.
#[derive(Debug, Default)]
pub struct DestinationIndex {
    by_name: HashMap<String, String>,
    untitled: usize,
}

impl DestinationIndex {
    /// Index pages by title. Untitled pages cannot be matched and are
    /// skipped. When two pages share a title, the later one wins.
    #[must_use]
    pub fn build(pages: &[DestinationPage]) -> Self {
        let mut index = Self::default();
        for page in pages {
            match page.title() {
                Some(title) => {
                    if let Some(previous) = index.by_name.insert(title, page.id.clone()) {
                        tracing::debug!(
                            replaced = %previous,
                            page_id = %page.id,
                            "Destination has several pages with the same title"
                        );
                    }
                }
                None => index.untitled += 1,
            }
        }
        index
    }

    /// Page id for a repository name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    /// Number of indexed names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Number of pages left out because they had no title.
    #[must_use]
    pub fn untitled(&self) -> usize {
        self.untitled
    }
}
