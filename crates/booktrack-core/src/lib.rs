//! # booktrack-core: Pure Domain Logic for Booktrack
//!
//! This crate holds the client-side domain model of the book tracker as
//! pure functions and plain data, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Booktrack Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (apps/cli, mobile UI)              │   │
//! │  │      Book list ──► Form ──► Edit / Delete buttons               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 booktrack-sync (BookStore, HTTP, credentials)   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ booktrack-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ collection │  │   draft   │  │  notice   │  │   │
//! │  │   │BookRecord │  │  ordered,  │  │  Idle /   │  │  wording  │  │   │
//! │  │   │ BookInput │  │  id-unique │  │ Composing │  │  per op   │  │   │
//! │  │   └───────────┘  └────────────┘  │ / Editing │  └───────────┘  │   │
//! │  │                                  └───────────┘                  │   │
//! │  │   NO I/O • NO NETWORK • NO STORAGE                              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `BookRecord`, `BookInput`, `BookField`
//! - [`collection`] - The session's ordered list of records
//! - [`draft`] - Form draft and its create/edit state machine
//! - [`notice`] - User-visible outcome messages
//! - [`validation`] - Required-field checks
//! - [`error`] - Validation error type
//!
//! ## Example Usage
//!
//! ```rust
//! use booktrack_core::{BookField, DraftState, FormDraft, SaveMode};
//!
//! let mut draft = FormDraft::new();
//! draft.set_field(BookField::Title, "Dune");
//! assert_eq!(draft.state(), DraftState::Composing);
//! assert_eq!(draft.save_mode(), SaveMode::Create);
//!
//! // Three fields are still empty
//! assert!(draft.to_input().is_err());
//! ```

pub mod collection;
pub mod draft;
pub mod error;
pub mod notice;
pub mod types;
pub mod validation;

pub use collection::BookCollection;
pub use draft::{DraftState, FormDraft, SaveMode};
pub use error::ValidationError;
pub use notice::{BookOperation, Notice, NoticeKind};
pub use types::*;

/// Key under which the bearer token lives in the credential store.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Collection endpoint, relative to the API base URL.
pub const BOOKS_PATH: &str = "/api/books";
