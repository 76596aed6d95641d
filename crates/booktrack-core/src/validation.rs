//! # Validation Module
//!
//! Input validation for the book form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation                                                 │
//! │  └── Collects raw text per field                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── All four fields required (non-blank)                              │
//! │  └── Produces the BookInput request body                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Server                                                       │
//! │  └── Final authority; rejections come back as protocol failures        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{BookField, BookInput};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a single required text field.
///
/// ## Example
/// ```rust
/// use booktrack_core::validation::validate_required;
/// use booktrack_core::BookField;
///
/// assert!(validate_required(BookField::Title, "Dune").is_ok());
/// assert!(validate_required(BookField::Title, "   ").is_err());
/// ```
pub fn validate_required(field: BookField, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field.as_str()));
    }
    Ok(())
}

/// Validates the four draft fields and builds the request body.
///
/// Fields are checked in form order; the first empty one is reported.
/// Values are sent as typed, without trimming.
pub fn validate_input(
    title: &str,
    author: &str,
    genre: &str,
    description: &str,
) -> ValidationResult<BookInput> {
    validate_required(BookField::Title, title)?;
    validate_required(BookField::Author, author)?;
    validate_required(BookField::Genre, genre)?;
    validate_required(BookField::Description, description)?;

    Ok(BookInput {
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.to_string(),
        description: description.to_string(),
    })
}

/// Validates a record id used in a request path.
pub fn validate_record_id(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::required("id"));
    }
    if id.trim().is_empty() {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must not be blank".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_input_all_present() {
        let input = validate_input("Dune", "Herbert", "SciFi", "Desert planet").unwrap();
        assert_eq!(input.title, "Dune");
        assert_eq!(input.description, "Desert planet");
    }

    #[test]
    fn test_validate_input_reports_first_missing_field() {
        let err = validate_input("Dune", "", "", "Desert planet").unwrap_err();
        assert_eq!(err, ValidationError::required("author"));

        let err = validate_input("Dune", "Herbert", "SciFi", " ").unwrap_err();
        assert_eq!(err, ValidationError::required("description"));
    }

    #[test]
    fn test_validate_record_id() {
        assert!(validate_record_id("64f0c0ffee").is_ok());
        assert!(validate_record_id("").is_err());
        assert!(validate_record_id("  ").is_err());
    }
}
