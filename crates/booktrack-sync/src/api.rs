//! # Books API Client
//!
//! One method per remote operation; each issues exactly one HTTP request.
//!
//! ## Request Matrix
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation   Method   Path              Body          Success           │
//! │  ─────────   ──────   ────              ────          ───────           │
//! │  list        GET      /api/books        -             {data: [..]}      │
//! │  create      POST     /api/books        BookInput     {data: {..}}      │
//! │  update      PUT      /api/books/{id}   BookInput     {data: {..}}      │
//! │  delete      DELETE   /api/books/{id}   -             any completion    │
//! │                                                                         │
//! │  Every request carries `Authorization: <resolved value or "">`.         │
//! │  create/update/delete also send `Content-Type: application/json`.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The [`BooksApi`] trait is the seam the store depends on; tests swap in a
//! scripted fake.

use async_trait::async_trait;
use booktrack_core::{BookInput, BookRecord, BOOKS_PATH};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{SyncError, SyncResult};
use crate::protocol::{decode_list, decode_record, summarize};

/// Result of a delete that reached the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// HTTP status the server answered with. Not used to decide removal.
    pub status: u16,
}

impl DeleteOutcome {
    pub fn is_success_status(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Remote books API.
///
/// `auth` is the already-resolved `Authorization` header value and may be
/// empty.
#[async_trait]
pub trait BooksApi: Send + Sync {
    async fn list(&self, auth: &str) -> SyncResult<Vec<BookRecord>>;

    async fn create(&self, auth: &str, input: &BookInput) -> SyncResult<BookRecord>;

    async fn update(&self, auth: &str, id: &str, input: &BookInput) -> SyncResult<BookRecord>;

    /// Succeeds whenever the request completes, whatever the status.
    async fn delete(&self, auth: &str, id: &str) -> SyncResult<DeleteOutcome>;
}

/// `reqwest`-backed implementation of [`BooksApi`].
#[derive(Debug, Clone)]
pub struct HttpBooksApi {
    client: Client,
    base_url: Url,
}

impl HttpBooksApi {
    /// Creates a client for `base_url` with an optional per-request timeout.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> SyncResult<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(SyncError::InvalidUrl(base_url.to_string()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SyncError::InvalidConfig(format!("HTTP client: {}", e)))?;

        Ok(HttpBooksApi { client, base_url })
    }

    pub fn from_config(config: &ClientConfig) -> SyncResult<Self> {
        Self::new(config.base_url(), config.api.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/api/books` or `{base}/api/books/{id}`, with `id` percent-encoded.
    fn books_url(&self, id: Option<&str>) -> SyncResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| SyncError::InvalidUrl(self.base_url.to_string()))?;
            segments
                .pop_if_empty()
                .extend(BOOKS_PATH.split('/').filter(|s| !s.is_empty()));
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    /// Sends the request and returns the body of a 2xx response.
    async fn send_expecting_success(request: RequestBuilder) -> SyncResult<String> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(SyncError::UnexpectedStatus {
                status: status.as_u16(),
                body: summarize(&body),
            });
        }
        Ok(body)
    }
}

fn transport_error(err: reqwest::Error) -> SyncError {
    SyncError::Transport(err.to_string())
}

#[async_trait]
impl BooksApi for HttpBooksApi {
    async fn list(&self, auth: &str) -> SyncResult<Vec<BookRecord>> {
        let url = self.books_url(None)?;
        debug!(%url, "GET books");

        let request = self.client.get(url).header(AUTHORIZATION, auth);
        let body = Self::send_expecting_success(request).await?;
        decode_list(&body)
    }

    async fn create(&self, auth: &str, input: &BookInput) -> SyncResult<BookRecord> {
        let url = self.books_url(None)?;
        debug!(%url, title = %input.title, "POST book");

        let request = self
            .client
            .post(url)
            .header(AUTHORIZATION, auth)
            .json(input);
        let body = Self::send_expecting_success(request).await?;
        decode_record(&body)
    }

    async fn update(&self, auth: &str, id: &str, input: &BookInput) -> SyncResult<BookRecord> {
        let url = self.books_url(Some(id))?;
        debug!(%url, id, "PUT book");

        let request = self
            .client
            .put(url)
            .header(AUTHORIZATION, auth)
            .json(input);
        let body = Self::send_expecting_success(request).await?;
        decode_record(&body)
    }

    async fn delete(&self, auth: &str, id: &str) -> SyncResult<DeleteOutcome> {
        let url = self.books_url(Some(id))?;
        debug!(%url, id, "DELETE book");

        let response = self
            .client
            .delete(url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, auth)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            // Body is informational only
            let body = response.text().await.unwrap_or_default();
            warn!(id, status = status.as_u16(), body = %summarize(&body), "Delete answered with non-success status");
        }

        Ok(DeleteOutcome {
            status: status.as_u16(),
        })
    }
}
