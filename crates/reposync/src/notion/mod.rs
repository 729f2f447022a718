//! Notion destination adapter.
//!
//! Implements [`Destination`](crate::destination::Destination) against the
//! Notion REST API: database query (with cursor pagination), page create and
//! page update.

mod client;
mod error;
mod types;

pub use client::{NOTION_API_BASE, NOTION_VERSION, NotionClient};
pub use error::NotionError;
pub use types::{NotionPage, QueryResponse};
