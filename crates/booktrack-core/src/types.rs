//! # Domain Types
//!
//! Core domain types used throughout Booktrack.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   BookRecord    │   │   BookInput     │   │   BookField     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (_id)       │   │  title          │   │  Title          │       │
//! │  │  title          │   │  author         │   │  Author         │       │
//! │  │  author         │   │  genre          │   │  Genre          │       │
//! │  │  genre          │   │  description    │   │  Description    │       │
//! │  │  description    │   │  (request body) │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is generated by the server and opaque to the client. On the wire it
//! is named `_id`. Decoding takes `_id` and falls back to `id`, so a
//! backend that emits both keys (virtual `id` alongside `_id`) still decodes.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

// =============================================================================
// Book Record
// =============================================================================

/// A book record acknowledged by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct BookRecord {
    /// Server-assigned identifier. Immutable after creation.
    #[serde(rename = "_id")]
    #[ts(rename = "_id")]
    pub id: String,

    pub title: String,

    pub author: String,

    pub genre: String,

    pub description: String,
}

/// Server shape of a record: `_id`, `id`, or both.
#[derive(Deserialize)]
struct BookRecordWire {
    #[serde(rename = "_id", default)]
    underscore_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    title: String,
    author: String,
    genre: String,
    description: String,
}

impl<'de> Deserialize<'de> for BookRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = BookRecordWire::deserialize(deserializer)?;
        let id = wire
            .underscore_id
            .filter(|id| !id.is_empty())
            .or(wire.id)
            .ok_or_else(|| serde::de::Error::missing_field("_id"))?;

        Ok(BookRecord {
            id,
            title: wire.title,
            author: wire.author,
            genre: wire.genre,
            description: wire.description,
        })
    }
}

impl BookRecord {
    /// Returns the four descriptive fields as a request body.
    pub fn to_input(&self) -> BookInput {
        BookInput {
            title: self.title.clone(),
            author: self.author.clone(),
            genre: self.genre.clone(),
            description: self.description.clone(),
        }
    }

    /// Returns the value of one descriptive field.
    pub fn field(&self, field: BookField) -> &str {
        match field {
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Genre => &self.genre,
            BookField::Description => &self.description,
        }
    }
}

impl std::fmt::Display for BookRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by {} ({})", self.title, self.author, self.genre)
    }
}

// =============================================================================
// Book Input
// =============================================================================

/// Body of a create or update request.
///
/// Only produced by [`crate::validation::validate_input`], so every instance
/// that reaches the network has four non-empty fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
}

// =============================================================================
// Book Field
// =============================================================================

/// One of the four editable fields of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BookField {
    Title,
    Author,
    Genre,
    Description,
}

impl BookField {
    /// All fields in form order.
    pub const ALL: [BookField; 4] = [
        BookField::Title,
        BookField::Author,
        BookField::Genre,
        BookField::Description,
    ];

    /// Field name as used in request bodies and validation messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookField::Title => "title",
            BookField::Author => "author",
            BookField::Genre => "genre",
            BookField::Description => "description",
        }
    }
}

impl std::fmt::Display for BookField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_decodes_underscore_id() {
        let json = r#"{"_id":"1","title":"Dune","author":"Herbert","genre":"SciFi","description":"Desert planet"}"#;
        let record: BookRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "1");
        assert_eq!(record.genre, "SciFi");
    }

    #[test]
    fn test_record_decodes_plain_id() {
        let json = r#"{"id":"7","title":"Emma","author":"Austen","genre":"Classic","description":"Matchmaking"}"#;
        let record: BookRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "7");
    }

    #[test]
    fn test_record_decodes_with_both_id_keys() {
        let json = r#"{"_id":"64f0","id":"64f0","title":"Dune","author":"Herbert","genre":"SciFi","description":"Desert planet"}"#;
        let record: BookRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "64f0");
    }

    #[test]
    fn test_record_prefers_underscore_id() {
        let json = r#"{"_id":"a","id":"b","title":"T","author":"A","genre":"G","description":"D"}"#;
        let record: BookRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "a");
    }

    #[test]
    fn test_record_without_any_id_fails() {
        let json = r#"{"title":"T","author":"A","genre":"G","description":"D"}"#;
        assert!(serde_json::from_str::<BookRecord>(json).is_err());
    }

    #[test]
    fn test_record_serializes_underscore_id() {
        let record = BookRecord {
            id: "1".into(),
            title: "Dune".into(),
            author: "Herbert".into(),
            genre: "SciFi".into(),
            description: "Desert planet".into(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["_id"], "1");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_typescript_binding_uses_wire_id() {
        let decl = BookRecord::decl();
        assert!(decl.contains("_id: string"), "{decl}");
        assert!(!decl.contains(" id: string"), "{decl}");
    }

    #[test]
    fn test_record_ignores_extra_server_fields() {
        let json = r#"{"_id":"1","title":"Dune","author":"Herbert","genre":"SciFi","description":"x","__v":0,"user":"u1"}"#;
        assert!(serde_json::from_str::<BookRecord>(json).is_ok());
    }

    #[test]
    fn test_input_body_has_exactly_four_fields() {
        let input = BookInput {
            title: "Dune".into(),
            author: "Herbert".into(),
            genre: "SciFi".into(),
            description: "Desert planet".into(),
        };
        let value = serde_json::to_value(&input).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(obj["title"], "Dune");
    }

    #[test]
    fn test_display() {
        let record = BookRecord {
            id: "1".into(),
            title: "Dune".into(),
            author: "Herbert".into(),
            genre: "SciFi".into(),
            description: "Desert planet".into(),
        };
        assert_eq!(record.to_string(), "Dune by Herbert (SciFi)");
        assert_eq!(record.field(BookField::Author), "Herbert");
    }
}
