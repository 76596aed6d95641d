//! # Notices
//!
//! User-visible outcome messages produced by every store operation.
//!
//! The presentation layer decides how to show them (alert, toast, stderr);
//! this module only decides the wording.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::draft::SaveMode;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Failure,
    /// Draft rejected before any network call.
    Validation,
}

/// The operation a notice reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BookOperation {
    Load,
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for BookOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookOperation::Load => write!(f, "load"),
            BookOperation::Create => write!(f, "create"),
            BookOperation::Update => write!(f, "update"),
            BookOperation::Delete => write!(f, "delete"),
        }
    }
}

impl From<&SaveMode> for BookOperation {
    fn from(mode: &SaveMode) -> Self {
        match mode {
            SaveMode::Create => BookOperation::Create,
            SaveMode::Update { .. } => BookOperation::Update,
        }
    }
}

/// A user-visible message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub kind: NoticeKind,
    pub operation: BookOperation,
    pub title: String,
    pub message: String,
    #[ts(as = "String")]
    pub raised_at: DateTime<Utc>,
}

impl Notice {
    fn new(
        kind: NoticeKind,
        operation: BookOperation,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Notice {
            kind,
            operation,
            title: title.into(),
            message: message.into(),
            raised_at: Utc::now(),
        }
    }

    /// Success after the save branch `mode` went through.
    pub fn saved(mode: &SaveMode) -> Self {
        match mode {
            SaveMode::Create => Notice::new(
                NoticeKind::Success,
                BookOperation::Create,
                "Added",
                "Book added successfully!",
            ),
            SaveMode::Update { .. } => Notice::new(
                NoticeKind::Success,
                BookOperation::Update,
                "Updated",
                "Book updated successfully!",
            ),
        }
    }

    /// A draft field was empty.
    pub fn missing_fields(operation: BookOperation) -> Self {
        Notice::new(
            NoticeKind::Validation,
            operation,
            "Missing fields",
            "Please fill in all fields.",
        )
    }

    /// The server answered but the answer was unusable.
    pub fn rejected(operation: BookOperation) -> Self {
        let message = match operation {
            BookOperation::Load => "Failed to fetch books.",
            BookOperation::Create => "Failed to add book. Please try again.",
            BookOperation::Update => "Failed to update book. Please try again.",
            BookOperation::Delete => "Failed to delete book. Please try again.",
        };
        Notice::new(NoticeKind::Failure, operation, "Failed", message)
    }

    /// The request never completed.
    pub fn unreachable(operation: BookOperation) -> Self {
        let message = match operation {
            BookOperation::Load => "An error occurred while fetching books.",
            BookOperation::Create => "An error occurred while adding the book.",
            BookOperation::Update => "An error occurred while updating the book.",
            BookOperation::Delete => "An error occurred while deleting the book.",
        };
        Notice::new(NoticeKind::Failure, operation, "Error", message)
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_wording_follows_branch() {
        let created = Notice::saved(&SaveMode::Create);
        assert_eq!(created.operation, BookOperation::Create);
        assert_eq!(created.title, "Added");
        assert_eq!(created.message, "Book added successfully!");

        let updated = Notice::saved(&SaveMode::Update { id: "1".into() });
        assert_eq!(updated.operation, BookOperation::Update);
        assert_eq!(updated.title, "Updated");
        assert_eq!(updated.message, "Book updated successfully!");
    }

    #[test]
    fn test_failure_wording_distinguishes_create_and_update() {
        assert_ne!(
            Notice::rejected(BookOperation::Create).message,
            Notice::rejected(BookOperation::Update).message
        );
        assert_ne!(
            Notice::unreachable(BookOperation::Create).message,
            Notice::unreachable(BookOperation::Update).message
        );
    }

    #[test]
    fn test_operation_from_save_mode() {
        assert_eq!(BookOperation::from(&SaveMode::Create), BookOperation::Create);
        assert_eq!(
            BookOperation::from(&SaveMode::Update { id: "x".into() }),
            BookOperation::Update
        );
    }

    #[test]
    fn test_kinds() {
        assert!(Notice::saved(&SaveMode::Create).is_success());
        assert_eq!(
            Notice::missing_fields(BookOperation::Create).kind,
            NoticeKind::Validation
        );
        assert_eq!(
            Notice::unreachable(BookOperation::Delete).kind,
            NoticeKind::Failure
        );
    }
}
