//! # Form Draft
//!
//! Transient input state behind the single create/edit form.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Form Draft States                                 │
//! │                                                                         │
//! │              set_field                                                  │
//! │   ┌──────┐ ───────────────► ┌───────────┐                               │
//! │   │ Idle │                  │ Composing │                               │
//! │   └──────┘ ◄─────────────── └───────────┘                               │
//! │     ▲  │   create ok/reset        │                                     │
//! │     │  │                          │ start_edit                          │
//! │     │  │ start_edit               ▼                                     │
//! │     │  └──────────────────► ┌───────────┐                               │
//! │     └────────────────────── │  Editing  │                               │
//! │        update ok / reset    └───────────┘                               │
//! │                                                                         │
//! │  • editing_target absent → submit means CREATE                         │
//! │  • editing_target present → submit means UPDATE that record            │
//! │  • No terminal state: the machine cycles for the whole session         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{BookField, BookInput, BookRecord};
use crate::validation::{validate_input, ValidationResult};

/// Observable state of a [`FormDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DraftState {
    /// No target and all fields empty.
    Idle,
    /// At least one field typed, no target.
    Composing,
    /// Fields populated from an existing record.
    Editing,
}

/// What submitting the draft will do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveMode {
    Create,
    Update { id: String },
}

/// The four form fields plus the record being edited, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDraft {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
    editing_target: Option<BookRecord>,
}

impl FormDraft {
    /// Creates an idle draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of the machine.
    pub fn state(&self) -> DraftState {
        if self.editing_target.is_some() {
            DraftState::Editing
        } else if BookField::ALL.iter().all(|f| self.field(*f).is_empty()) {
            DraftState::Idle
        } else {
            DraftState::Composing
        }
    }

    /// The record being edited, if any.
    pub fn editing_target(&self) -> Option<&BookRecord> {
        self.editing_target.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_target.is_some()
    }

    /// Whether submitting creates a new record or updates the target.
    pub fn save_mode(&self) -> SaveMode {
        match &self.editing_target {
            Some(target) => SaveMode::Update {
                id: target.id.clone(),
            },
            None => SaveMode::Create,
        }
    }

    pub fn field(&self, field: BookField) -> &str {
        match field {
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Genre => &self.genre,
            BookField::Description => &self.description,
        }
    }

    /// Overwrites one field. Does not touch the editing target.
    pub fn set_field(&mut self, field: BookField, value: impl Into<String>) {
        let value = value.into();
        match field {
            BookField::Title => self.title = value,
            BookField::Author => self.author = value,
            BookField::Genre => self.genre = value,
            BookField::Description => self.description = value,
        }
    }

    /// Loads `record` into the form and targets it for update.
    pub fn start_edit(&mut self, record: &BookRecord) {
        self.title = record.title.clone();
        self.author = record.author.clone();
        self.genre = record.genre.clone();
        self.description = record.description.clone();
        self.editing_target = Some(record.clone());
    }

    /// Clears all fields and the editing target.
    pub fn reset(&mut self) {
        *self = FormDraft::default();
    }

    /// Validates the fields and builds the request body.
    pub fn to_input(&self) -> ValidationResult<BookInput> {
        validate_input(&self.title, &self.author, &self.genre, &self.description)
    }
}
