//! Notion API request and response types.

use serde::{Deserialize, Serialize};

use crate::mapping::PropertyBag;

/// Body of `POST /databases/{id}/query`.
#[derive(Debug, Serialize)]
pub(super) struct QueryRequest<'a> {
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<&'a str>,
}

/// One page of a database query.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<NotionPage>,
    #[serde(default)]
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

/// A Notion page as returned by query, create and update.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionPage {
    pub id: String,
    #[serde(default)]
    pub properties: PropertyBag,
}

#[derive(Debug, Serialize)]
pub(super) struct DatabaseParent<'a> {
    pub database_id: &'a str,
}

/// Body of `POST /pages`.
#[derive(Debug, Serialize)]
pub(super) struct CreatePageRequest<'a> {
    pub parent: DatabaseParent<'a>,
    pub properties: &'a PropertyBag,
}

/// Body of `PATCH /pages/{id}`.
#[derive(Debug, Serialize)]
pub(super) struct UpdatePageRequest<'a> {
    pub properties: &'a PropertyBag,
}

/// Error object returned with non-2xx responses.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
}
