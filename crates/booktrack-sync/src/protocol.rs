//! # Wire Protocol
//!
//! Response envelopes of the books API and their validation.
//!
//! ## Envelope Shape
//! ```text
//! GET    /api/books        →  { "data": [ BookRecord, ... ] }
//! POST   /api/books        →  { "data": BookRecord }
//! PUT    /api/books/{id}   →  { "data": BookRecord }
//! DELETE /api/books/{id}   →  anything, including an empty body
//! ```
//!
//! Decoding is all-or-nothing: a list with one malformed element is
//! rejected as a whole so the store never applies a partial response.

use booktrack_core::BookRecord;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{SyncError, SyncResult};

/// Top-level `{ data: ... }` wrapper. Other keys (e.g. `message`) are ignored.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Value>,
}

fn parse_envelope(body: &str) -> SyncResult<Value> {
    let envelope: Envelope = serde_json::from_str(body)?;
    match envelope.data {
        Some(Value::Null) | None => Err(SyncError::MissingData(summarize(body))),
        Some(data) => Ok(data),
    }
}

/// Decodes a list response.
pub fn decode_list(body: &str) -> SyncResult<Vec<BookRecord>> {
    match parse_envelope(body)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(SyncError::from))
            .collect(),
        other => Err(SyncError::MissingData(format!(
            "expected an array, got {}",
            kind_of(&other)
        ))),
    }
}

/// Decodes a create/update response. The record must carry a non-empty id.
pub fn decode_record(body: &str) -> SyncResult<BookRecord> {
    let data = parse_envelope(body)?;
    let Value::Object(ref fields) = data else {
        return Err(SyncError::MissingData(format!(
            "expected an object, got {}",
            kind_of(&data)
        )));
    };

    let has_id = ["_id", "id"]
        .iter()
        .filter_map(|k| fields.get(*k))
        .any(|v| v.as_str().is_some_and(|s| !s.is_empty()));
    if !has_id {
        return Err(SyncError::MissingId);
    }

    Ok(serde_json::from_value(data)?)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// First 200 chars of a body, for error messages and logs.
pub(crate) fn summarize(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}…", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_list_preserves_order() {
        let body = r#"{"data":[
            {"_id":"b","title":"T2","author":"A","genre":"G","description":"D"},
            {"_id":"a","title":"T1","author":"A","genre":"G","description":"D"}
        ]}"#;
        let books = decode_list(body).unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].id, "b");
        assert_eq!(books[1].id, "a");
    }

    #[test]
    fn test_decode_list_empty_array() {
        assert!(decode_list(r#"{"data":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn test_decode_list_missing_data() {
        let err = decode_list(r#"{"message":"Unauthorized"}"#).unwrap_err();
        assert!(matches!(err, SyncError::MissingData(_)));

        let err = decode_list(r#"{"data":null}"#).unwrap_err();
        assert!(matches!(err, SyncError::MissingData(_)));

        let err = decode_list(r#"{"data":{"_id":"1"}}"#).unwrap_err();
        assert!(matches!(err, SyncError::MissingData(_)));
    }

    #[test]
    fn test_decode_list_rejects_partially_malformed_payload() {
        let body = r#"{"data":[
            {"_id":"a","title":"T1","author":"A","genre":"G","description":"D"},
            {"_id":"b","title":"T2"}
        ]}"#;
        assert!(decode_list(body).unwrap_err().is_protocol());
    }

    #[test]
    fn test_decode_list_not_json() {
        assert!(decode_list("<html>502 Bad Gateway</html>").unwrap_err().is_protocol());
    }

    #[test]
    fn test_decode_record() {
        let body = r#"{"data":{"_id":"1","title":"Dune","author":"Herbert","genre":"SciFi","description":"Desert planet"}}"#;
        let book = decode_record(body).unwrap();
        assert_eq!(book.id, "1");
        assert_eq!(book.title, "Dune");
    }

    #[test]
    fn test_decode_record_missing_id() {
        let body = r#"{"data":{"title":"Dune","author":"Herbert","genre":"SciFi","description":"x"}}"#;
        assert!(matches!(decode_record(body).unwrap_err(), SyncError::MissingId));

        let body = r#"{"data":{"_id":"","title":"Dune","author":"Herbert","genre":"SciFi","description":"x"}}"#;
        assert!(matches!(decode_record(body).unwrap_err(), SyncError::MissingId));
    }

    #[test]
    fn test_decode_accepts_records_with_both_id_keys() {
        let item = r#"{"_id":"1","id":"1","title":"Dune","author":"Herbert","genre":"SciFi","description":"Desert planet"}"#;

        let books = decode_list(&format!(r#"{{"data":[{}]}}"#, item)).unwrap();
        assert_eq!(books[0].id, "1");

        let book = decode_record(&format!(r#"{{"data":{}}}"#, item)).unwrap();
        assert_eq!(book.id, "1");
    }

    #[test]
    fn test_decode_record_falls_back_to_plain_id() {
        let body = r#"{"data":{"_id":"","id":"9","title":"Dune","author":"Herbert","genre":"SciFi","description":"x"}}"#;
        assert_eq!(decode_record(body).unwrap().id, "9");
    }

    #[test]
    fn test_decode_record_not_an_object() {
        assert!(matches!(
            decode_record(r#"{"data":[]}"#).unwrap_err(),
            SyncError::MissingData(_)
        ));
    }

    #[test]
    fn test_summarize_truncates_on_char_boundary() {
        let long = "é".repeat(300);
        let short = summarize(&long);
        assert!(short.ends_with('…'));
        assert_eq!(short.chars().count(), 201);
        assert_eq!(summarize("ok"), "ok");
    }
}
