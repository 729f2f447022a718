//! Transport seam for the Notion adapter.
//!
//! [`NotionClient`](crate::notion::NotionClient) hands fully-built JSON
//! requests to an [`HttpTransport`] and only looks at the status code and
//! body that come back. Tests swap in a scripted transport.

use async_trait::async_trait;
use thiserror::Error;

/// Methods the Notion API is called with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Database queries and page creation.
    Post,
    /// Page property updates.
    Patch,
}

/// An outgoing JSON request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Vec<u8>,
}

/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response.
#[derive(Debug, Error)]
#[error("request failed: {0}")]
pub struct HttpError(pub String);

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

#[cfg(feature = "notion")]
pub mod reqwest_transport {
    use std::time::Duration;

    use super::{HttpError, HttpMethod, HttpRequest, HttpResponse, HttpTransport, async_trait};

    /// [`HttpTransport`] over a shared reqwest client.
    #[derive(Clone)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        /// Build a client whose requests give up after `timeout`.
        pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
            reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map(|client| Self { client })
                .map_err(|e| HttpError(e.to_string()))
        }
    }

    #[async_trait]
    impl HttpTransport for ReqwestTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            let method = match request.method {
                HttpMethod::Post => reqwest::Method::POST,
                HttpMethod::Patch => reqwest::Method::PATCH,
            };

            let builder = request
                .headers
                .into_iter()
                .fold(self.client.request(method, &request.url), |b, (k, v)| {
                    b.header(k, v)
                });

            let resp = builder
                .body(request.body)
                .send()
                .await
                .map_err(|e| HttpError(e.to_string()))?;
            let status = resp.status().as_u16();
            let body = resp
                .bytes()
                .await
                .map_err(|e| HttpError(e.to_string()))?
                .to_vec();

            Ok(HttpResponse { status, body })
        }
    }
}

#[cfg(test)]
pub use scripted::ScriptedTransport;
