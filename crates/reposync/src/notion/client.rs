//! Notion API client.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::NotionError;
use super::types::{
    CreatePageRequest, DatabaseParent, ErrorBody, NotionPage, QueryRequest, QueryResponse,
    UpdatePageRequest,
};
use crate::destination::{self, Destination, DestinationPage};
use crate::http::reqwest_transport::ReqwestTransport;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::mapping::PropertyBag;

/// Default API base URL.
pub const NOTION_API_BASE: &str = "https://api.notion.com/v1";

/// API version sent with every request.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Maximum page size accepted by the query endpoint.
const PAGE_SIZE: u32 = 100;

/// Notion API client.
#[derive(Clone)]
pub struct NotionClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    token: String,
}

impl NotionClient {
    /// Create a client for the public Notion API using an integration token.
    pub fn new(token: &str) -> Result<Self, NotionError> {
        let transport = ReqwestTransport::with_timeout(StdDuration::from_secs(30))
            .map_err(|e| NotionError::Config(e.to_string()))?;
        Ok(Self::new_with_transport(
            NOTION_API_BASE,
            token,
            Arc::new(transport),
        ))
    }

    pub fn new_with_transport(
        base_url: &str,
        token: &str,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Send an authenticated request with an optional JSON body.
    async fn request<T, B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, NotionError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let body = match body {
            Some(b) => serde_json::to_vec(b)?,
            None => Vec::new(),
        };

        let request = HttpRequest {
            method,
            url,
            headers: vec![
                ("Authorization", format!("Bearer {}", self.token)),
                ("Notion-Version", NOTION_VERSION.to_string()),
                ("Content-Type", "application/json".to_string()),
                ("Accept", "application/json".to_string()),
            ],
            body,
        };

        let response: HttpResponse = self
            .transport
            .send(request)
            .await
            .map_err(|e| NotionError::Http(e.0))?;

        if !response.is_success() {
            return Err(Self::api_error(&response));
        }

        serde_json::from_slice(&response.body).map_err(NotionError::Json)
    }

    fn api_error(response: &HttpResponse) -> NotionError {
        match serde_json::from_slice::<ErrorBody>(&response.body) {
            Ok(body) => NotionError::Api {
                status: response.status,
                code: body.code,
                message: body
                    .message
                    .unwrap_or_else(|| format!("HTTP {}", response.status)),
            },
            Err(_) => NotionError::Api {
                status: response.status,
                code: None,
                message: String::from_utf8_lossy(&response.body).to_string(),
            },
        }
    }

    /// Fetch one page of database results.
    pub async fn query_database(
        &self,
        database_id: &str,
        start_cursor: Option<&str>,
    ) -> Result<QueryResponse, NotionError> {
        let body = QueryRequest {
            page_size: PAGE_SIZE,
            start_cursor,
        };
        self.request(
            HttpMethod::Post,
            &format!("/databases/{}/query", database_id),
            Some(&body),
        )
        .await
    }

    /// Fetch every page of a database, following cursors until exhausted.
    pub async fn query_all_pages(&self, database_id: &str) -> Result<Vec<NotionPage>, NotionError> {
        let mut pages = Vec::new();
        let mut cursor: Option<String> = None;
        let mut batch = 0u32;

        loop {
            let response = self.query_database(database_id, cursor.as_deref()).await?;
            batch += 1;
            tracing::debug!(
                batch,
                count = response.results.len(),
                has_more = response.has_more,
                "Fetched database page"
            );
            pages.extend(response.results);

            match response.next_cursor {
                Some(next) if response.has_more => cursor = Some(next),
                _ => break,
            }
        }

        Ok(pages)
    }

    /// Create a page in a database.
    pub async fn create_page(
        &self,
        database_id: &str,
        properties: &PropertyBag,
    ) -> Result<NotionPage, NotionError> {
        let body = CreatePageRequest {
            parent: DatabaseParent { database_id },
            properties,
        };
        self.request(HttpMethod::Post, "/pages", Some(&body)).await
    }

    /// Replace properties on an existing page.
    pub async fn update_page(
        &self,
        page_id: &str,
        properties: &PropertyBag,
    ) -> Result<NotionPage, NotionError> {
        let body = UpdatePageRequest { properties };
        self.request(HttpMethod::Patch, &format!("/pages/{}", page_id), Some(&body))
            .await
    }
}

#[async_trait]
impl Destination for NotionClient {
    async fn query_all(&self, collection_id: &str) -> destination::Result<Vec<DestinationPage>> {
        let pages = self.query_all_pages(collection_id).await?;
        Ok(pages
            .into_iter()
            .map(|p| DestinationPage {
                id: p.id,
                properties: p.properties,
            })
            .collect())
    }

    async fn create(
        &self,
        collection_id: &str,
        properties: &PropertyBag,
    ) -> destination::Result<String> {
        let page = self.create_page(collection_id, properties).await?;
        Ok(page.id)
    }

    async fn update(&self, page_id: &str, properties: &PropertyBag) -> destination::Result<()> {
        self.update_page(page_id, properties).await?;
        Ok(())
    }
}
