//! # Error Types
//!
//! Domain-specific error types for booktrack-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  booktrack-core errors (this file)                                     │
//! │  └── ValidationError  - Draft input failures (caught before network)   │
//! │                                                                         │
//! │  booktrack-sync errors (separate crate)                                │
//! │  └── SyncError        - Transport, protocol, credential, config        │
//! │                                                                         │
//! │  Flow: ValidationError → SyncError → Notice → Presentation layer       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// These errors occur when the form draft doesn't meet the requirements
/// of a create or update request. They never reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., an id containing only whitespace).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Shorthand for a [`ValidationError::Required`] on `field`.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}
