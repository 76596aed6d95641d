//! # Local Collection
//!
//! The ordered, in-memory list of book records for the current session.
//!
//! ## Reconciliation Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Collection Operations                                │
//! │                                                                         │
//! │  Server Outcome            Method                 Collection Change     │
//! │  ──────────────            ──────                 ─────────────────     │
//! │                                                                         │
//! │  list succeeded ─────────► replace_all() ───────► records = payload    │
//! │                                                                         │
//! │  create succeeded ───────► append() ────────────► records.push(rec)    │
//! │                                                                         │
//! │  update succeeded ───────► replace_matching() ──► records[i] = rec     │
//! │                                                  (matched by id)       │
//! │                                                                         │
//! │  delete completed ───────► remove() ────────────► records.retain(..)   │
//! │                                                                         │
//! │  NOTE: every method applies its change in one step. A failed request   │
//! │        never reaches this type, so nothing speculative is stored.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::types::BookRecord;

/// Ordered collection of server-acknowledged book records.
///
/// ## Invariants
/// - Order is server order after a load, append order after creates
/// - Updates replace in place and never grow the collection
/// - `append` and `replace_matching` never introduce a duplicate id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookCollection {
    records: Vec<BookRecord>,
}

impl BookCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every record with the server's list, order preserved.
    pub fn replace_all(&mut self, records: Vec<BookRecord>) {
        self.records = records;
    }

    /// Appends a newly created record.
    ///
    /// If a record with the same id is already present it is replaced in
    /// place instead, keeping ids unique.
    pub fn append(&mut self, record: BookRecord) {
        if let Some(existing) = self.records.iter_mut().find(|r| r.id == record.id) {
            *existing = record;
            return;
        }
        self.records.push(record);
    }

    /// Replaces the entry whose id matches `record.id`.
    ///
    /// Returns `false` and drops `record` when no entry matches.
    pub fn replace_matching(&mut self, record: BookRecord) -> bool {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                *existing = record;
                true
            }
            None => false,
        }
    }

    /// Removes the entry with `id`. Returns `true` if one was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let initial_len = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != initial_len
    }

    /// Looks up a record by id.
    pub fn get(&self, id: &str) -> Option<&BookRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BookRecord> {
        self.records.iter()
    }

    /// Records in display order.
    pub fn as_slice(&self) -> &[BookRecord] {
        &self.records
    }
}

impl From<Vec<BookRecord>> for BookCollection {
    fn from(records: Vec<BookRecord>) -> Self {
        BookCollection { records }
    }
}

impl<'a> IntoIterator for &'a BookCollection {
    type Item = &'a BookRecord;
    type IntoIter = std::slice::Iter<'a, BookRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
