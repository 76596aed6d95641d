//! # Book Commands
//!
//! ```text
//! list    load()                                    → print collection
//! add     set_field × 4 → save()                    → Created
//! edit    load() → start_edit(id) → overrides → save() → Updated
//! delete  remove(id)                                → local entry dropped
//! ```

use std::process::ExitCode;

use booktrack_core::BookField;
use booktrack_sync::{BookStore, SaveOutcome};

use crate::context::AppContext;
use crate::{BookFields, FieldOverrides};

pub async fn list(ctx: AppContext, json: bool) -> anyhow::Result<ExitCode> {
    let mut store = ctx.into_store();
    if store.load().await.is_err() {
        return Ok(ExitCode::FAILURE);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(store.books())?);
    } else if store.books().is_empty() {
        println!("No books yet.");
    } else {
        for book in store.books() {
            println!("{:<26} {}", book.id, book);
        }
    }
    Ok(ExitCode::SUCCESS)
}

pub async fn add(ctx: AppContext, fields: BookFields) -> anyhow::Result<ExitCode> {
    let mut store = ctx.into_store();
    store.set_field(BookField::Title, fields.title);
    store.set_field(BookField::Author, fields.author);
    store.set_field(BookField::Genre, fields.genre);
    store.set_field(BookField::Description, fields.description);

    Ok(report(store.save().await))
}

pub async fn edit(ctx: AppContext, id: &str, fields: FieldOverrides) -> anyhow::Result<ExitCode> {
    let mut store = ctx.into_store();
    if store.load().await.is_err() {
        return Ok(ExitCode::FAILURE);
    }

    if !store.start_edit_by_id(id) {
        eprintln!("✗ No book with id {}", id);
        return Ok(ExitCode::FAILURE);
    }
    apply_overrides(&mut store, fields);

    Ok(report(store.save().await))
}

pub async fn delete(ctx: AppContext, id: &str) -> anyhow::Result<ExitCode> {
    let mut store = ctx.into_store();
    match store.remove(id).await {
        Ok(_) => {
            println!("Deleted {}", id);
            Ok(ExitCode::SUCCESS)
        }
        Err(_) => Ok(ExitCode::FAILURE),
    }
}

fn apply_overrides(store: &mut BookStore, fields: FieldOverrides) {
    let overrides = [
        (BookField::Title, fields.title),
        (BookField::Author, fields.author),
        (BookField::Genre, fields.genre),
        (BookField::Description, fields.description),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            store.set_field(field, value);
        }
    }
}

fn report(result: booktrack_sync::SyncResult<SaveOutcome>) -> ExitCode {
    match result {
        Ok(outcome) => {
            println!("  {}  {}", outcome.record().id, outcome.record());
            ExitCode::SUCCESS
        }
        Err(_) => ExitCode::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booktrack_core::BookRecord;
    use booktrack_sync::{CredentialProvider, HttpBooksApi, MemoryCredentialStore};
    use std::sync::Arc;

    fn offline_store() -> BookStore {
        let api = HttpBooksApi::new("http://127.0.0.1:9", None).unwrap();
        BookStore::new(
            Arc::new(api),
            CredentialProvider::new(Arc::new(MemoryCredentialStore::new())),
        )
    }

    #[test]
    fn test_overrides_touch_only_given_fields() {
        let mut store = offline_store();
        store.start_edit(&BookRecord {
            id: "1".into(),
            title: "Dune".into(),
            author: "Herbert".into(),
            genre: "SciFi".into(),
            description: "Desert planet".into(),
        });

        apply_overrides(
            &mut store,
            FieldOverrides {
                title: None,
                author: None,
                genre: Some("Fantasy".into()),
                description: None,
            },
        );

        let draft = store.draft();
        assert_eq!(draft.title, "Dune");
        assert_eq!(draft.genre, "Fantasy");
        assert_eq!(draft.editing_target().unwrap().id, "1");
    }
}
