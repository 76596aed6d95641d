//! # Book Store
//!
//! The synchronizer: owns the session's book collection and form draft,
//! talks to the books API, and folds every result back into local state.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         BookStore Operation                             │
//! │                                                                         │
//! │  UI event ──► store.save() / load() / remove(id)                       │
//! │                    │                                                    │
//! │                    ├── (save) draft.to_input()? ── Err ──► Validation   │
//! │                    │                                        notice      │
//! │                    ▼                                                    │
//! │            credentials.resolve_auth_header()                           │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │            api.<op>(auth, ..)   ◄── exactly one HTTP request           │
//! │                    │                                                    │
//! │         ┌──────────┴───────────┐                                       │
//! │         ▼                      ▼                                        │
//! │       Ok(..)                 Err(e)                                     │
//! │         │                      │                                        │
//! │  one collection change    no change (remove: only transport            │
//! │  + success notice         errors keep the entry) + failure notice      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Mutating operations take `&mut self`, so one store can only have one
//! operation in flight. Front ends that share a store across tasks wrap it
//! in [`SharedBookStore`].

use booktrack_core::validation::validate_record_id;
use booktrack_core::{
    BookCollection, BookField, BookOperation, BookRecord, DraftState, FormDraft, Notice, SaveMode,
};
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info, warn};

use crate::api::BooksApi;
use crate::credentials::CredentialProvider;
use crate::error::{SyncError, SyncResult};

/// A store shared between tasks. The mutex serializes operations.
pub type SharedBookStore = Arc<tokio::sync::Mutex<BookStore>>;

// =============================================================================
// Notice Sink
// =============================================================================

/// Receives user-visible notices from the store.
///
/// Implemented by the presentation layer (alert dialog, stderr, event bus).
pub trait NoticeSink: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Sink that drops every notice.
pub struct NoOpSink;

impl NoticeSink for NoOpSink {
    fn notify(&self, _notice: &Notice) {}
}

/// Sink that keeps every notice for later inspection.
#[derive(Debug, Default)]
pub struct NoticeLog {
    notices: Mutex<Vec<Notice>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, Vec<Notice>> {
        self.notices.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns and clears the collected notices.
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.guard())
    }

    pub fn last(&self) -> Option<Notice> {
        self.guard().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }
}

impl NoticeSink for NoticeLog {
    fn notify(&self, notice: &Notice) {
        self.guard().push(notice.clone());
    }
}

// =============================================================================
// Save Outcome
// =============================================================================

/// What a successful [`BookStore::save`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new record was appended.
    Created(BookRecord),
    /// The server accepted an update. `applied` is false when no local
    /// entry matched the returned id and the record was dropped.
    Updated { record: BookRecord, applied: bool },
}

impl SaveOutcome {
    pub fn record(&self) -> &BookRecord {
        match self {
            SaveOutcome::Created(record) => record,
            SaveOutcome::Updated { record, .. } => record,
        }
    }
}

// =============================================================================
// Book Store
// =============================================================================

/// Session state for the book list screen.
pub struct BookStore {
    api: Arc<dyn BooksApi>,
    credentials: CredentialProvider,
    sink: Arc<dyn NoticeSink>,
    books: BookCollection,
    draft: FormDraft,
}

impl BookStore {
    /// Creates a store that discards notices.
    pub fn new(api: Arc<dyn BooksApi>, credentials: CredentialProvider) -> Self {
        Self::with_sink(api, credentials, Arc::new(NoOpSink))
    }

    /// Creates a store that reports notices to `sink`.
    pub fn with_sink(
        api: Arc<dyn BooksApi>,
        credentials: CredentialProvider,
        sink: Arc<dyn NoticeSink>,
    ) -> Self {
        BookStore {
            api,
            credentials,
            sink,
            books: BookCollection::new(),
            draft: FormDraft::new(),
        }
    }

    /// Wraps the store for sharing between tasks.
    pub fn into_shared(self) -> SharedBookStore {
        Arc::new(tokio::sync::Mutex::new(self))
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    pub fn books(&self) -> &BookCollection {
        &self.books
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn draft_state(&self) -> DraftState {
        self.draft.state()
    }

    pub fn credentials(&self) -> &CredentialProvider {
        &self.credentials
    }

    // =========================================================================
    // Remote Operations
    // =========================================================================

    /// Replaces the collection with the server's list.
    ///
    /// Returns the number of records loaded. On any failure the collection
    /// is left exactly as it was.
    pub async fn load(&mut self) -> SyncResult<usize> {
        let auth = self.credentials.resolve_auth_header().await;

        match self.api.list(&auth).await {
            Ok(records) => {
                let count = records.len();
                self.books.replace_all(records);
                info!(count, "Books loaded");
                Ok(count)
            }
            Err(e) => Err(self.fail(BookOperation::Load, e)),
        }
    }

    /// Submits the draft: create when no record is targeted, update otherwise.
    ///
    /// The draft is cleared only on success, so a failed submit keeps the
    /// user's input for another attempt.
    pub async fn save(&mut self) -> SyncResult<SaveOutcome> {
        let mode = self.draft.save_mode();
        let operation = BookOperation::from(&mode);

        let input = match self.draft.to_input() {
            Ok(input) => input,
            Err(e) => {
                debug!(error = %e, %operation, "Draft rejected before request");
                self.sink.notify(&Notice::missing_fields(operation));
                return Err(e.into());
            }
        };

        let auth = self.credentials.resolve_auth_header().await;
        let result = match &mode {
            SaveMode::Create => self.api.create(&auth, &input).await,
            SaveMode::Update { id } => self.api.update(&auth, id, &input).await,
        };

        let record = match result {
            Ok(record) => record,
            Err(e) => return Err(self.fail(operation, e)),
        };

        let saved = Notice::saved(&mode);
        let outcome = match mode {
            SaveMode::Create => {
                self.books.append(record.clone());
                info!(id = %record.id, title = %record.title, "Book added");
                SaveOutcome::Created(record)
            }
            SaveMode::Update { id } => {
                let applied = self.books.replace_matching(record.clone());
                if applied {
                    info!(id = %record.id, "Book updated");
                } else {
                    warn!(
                        target_id = %id,
                        returned_id = %record.id,
                        "Updated record matches no local entry, dropping it"
                    );
                }
                SaveOutcome::Updated { record, applied }
            }
        };

        self.draft.reset();
        self.sink.notify(&saved);
        Ok(outcome)
    }

    /// Deletes a record on the server and drops it locally.
    ///
    /// The local entry goes away whenever the request completes, whatever
    /// the status or body. Only a transport failure keeps it. Returns whether
    /// a local entry was removed.
    pub async fn remove(&mut self, id: &str) -> SyncResult<bool> {
        if let Err(e) = validate_record_id(id) {
            self.sink.notify(&Notice::rejected(BookOperation::Delete));
            return Err(e.into());
        }

        let auth = self.credentials.resolve_auth_header().await;

        match self.api.delete(&auth, id).await {
            Ok(outcome) => {
                let removed = self.books.remove(id);
                info!(id, status = outcome.status, removed, "Book deleted");
                Ok(removed)
            }
            Err(e) => Err(self.fail(BookOperation::Delete, e)),
        }
    }

    // =========================================================================
    // Draft Operations (local only)
    // =========================================================================

    /// Loads `record` into the draft and targets it for update.
    pub fn start_edit(&mut self, record: &BookRecord) {
        debug!(id = %record.id, "Editing book");
        self.draft.start_edit(record);
    }

    /// Starts editing the collection entry with `id`. Returns false if absent.
    pub fn start_edit_by_id(&mut self, id: &str) -> bool {
        match self.books.get(id).cloned() {
            Some(record) => {
                self.start_edit(&record);
                true
            }
            None => false,
        }
    }

    /// Clears the draft and any editing target.
    pub fn reset_draft(&mut self) {
        self.draft.reset();
    }

    /// Records a keystroke-level field change.
    pub fn set_field(&mut self, field: BookField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    // =========================================================================
    // Failure Handling
    // =========================================================================

    /// Logs `err`, raises the matching notice, and hands the error back.
    fn fail(&self, operation: BookOperation, err: SyncError) -> SyncError {
        let notice = if err.is_transport() {
            error!(error = %err, %operation, "Request failed");
            Notice::unreachable(operation)
        } else {
            warn!(error = %err, %operation, "Server response rejected");
            Notice::rejected(operation)
        };
        self.sink.notify(&notice);
        err
    }
}

impl std::fmt::Debug for BookStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookStore")
            .field("books", &self.books.len())
            .field("draft", &self.draft.state())
            .finish_non_exhaustive()
    }
}
