//! # booktrack-sync: Synchronization Layer for Booktrack
//!
//! This crate keeps the session's book collection consistent with the
//! remote books API. It owns every piece of I/O: HTTP requests, the
//! credential store, and the config file.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Booktrack Sync Layer                            │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                   BookStore (Main Orchestrator)                  │  │
//! │  │                                                                  │  │
//! │  │  load() / save() / remove(id) / start_edit() / reset_draft()    │  │
//! │  │  Owns BookCollection + FormDraft, raises Notices                │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │                                         │
//! │         ┌─────────────────────┼─────────────────────┐                  │
//! │         ▼                     ▼                     ▼                   │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────┐    │
//! │  │ CredentialProv.│  │   BooksApi     │  │     NoticeSink         │    │
//! │  │                │  │                │  │                        │    │
//! │  │ authToken ──►  │  │ HttpBooksApi   │  │ Presentation layer     │    │
//! │  │ "Bearer <t>"   │  │ (reqwest)      │  │ (alerts, stderr, ...)  │    │
//! │  │ or ""          │  │ {data: ..}     │  │                        │    │
//! │  └────────────────┘  └────────────────┘  └────────────────────────┘    │
//! │                                                                         │
//! │  FAILURE CLASSES:                                                      │
//! │  • Validation - draft incomplete, no request made                      │
//! │  • Transport  - request never completed                                │
//! │  • Protocol   - completed, but status or payload unusable              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`store`] - `BookStore` synchronizer and `NoticeSink`
//! - [`api`] - `BooksApi` trait and its `reqwest` implementation
//! - [`credentials`] - Credential store and auth header resolution
//! - [`protocol`] - Response envelope decoding
//! - [`config`] - Client configuration (TOML + environment)
//! - [`error`] - Sync error types
//!
//! ## Usage
//! ```rust,no_run
//! use std::sync::Arc;
//! use booktrack_core::BookField;
//! use booktrack_sync::{
//!     BookStore, ClientConfig, CredentialProvider, HttpBooksApi, MemoryCredentialStore,
//! };
//!
//! # async fn run() -> booktrack_sync::SyncResult<()> {
//! let config = ClientConfig::load_or_default(None);
//! let api = Arc::new(HttpBooksApi::from_config(&config)?);
//! let credentials = CredentialProvider::new(Arc::new(MemoryCredentialStore::with_token("t")));
//!
//! let mut store = BookStore::new(api, credentials);
//! store.load().await?;
//!
//! store.set_field(BookField::Title, "Dune");
//! store.set_field(BookField::Author, "Herbert");
//! store.set_field(BookField::Genre, "SciFi");
//! store.set_field(BookField::Description, "Desert planet");
//! store.save().await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod credentials;
pub mod error;
pub mod protocol;
pub mod store;

pub use api::{BooksApi, DeleteOutcome, HttpBooksApi};
pub use config::{ApiSettings, ClientConfig, StorageSettings, DEFAULT_API_URL};
pub use credentials::{
    CredentialProvider, CredentialStore, FileCredentialStore, MemoryCredentialStore,
};
pub use error::{SyncError, SyncResult};
pub use store::{BookStore, NoOpSink, NoticeLog, NoticeSink, SaveOutcome, SharedBookStore};
