#![allow(dead_code)]

use std::sync::Arc;

use recordbook::{
    Editor,
    core::{MemoryStore, RecordId, SqliteStore, User, UserField},
};

/// Opens a SqliteStore in a fresh temporary directory.
/// Returns both the store and the temp directory (which must be kept alive).
pub async fn create_test_store() -> (SqliteStore, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("test.db");
    let store = SqliteStore::open(&path)
        .await
        .expect("Failed to open test store");
    (store, dir)
}

/// An editor over an empty in-memory store.
pub async fn create_user_editor() -> Editor<User, MemoryStore> {
    Editor::load(Arc::new(MemoryStore::new())).await
}

pub fn make_user(id: &str, first_name: &str, email: &str) -> User {
    User {
        id: RecordId::from(id),
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        phone: "555-0100".to_string(),
        email: email.to_string(),
    }
}

/// Fills every field of the editor's form.
pub fn fill_user_form<S: recordbook::core::KeyValueStore>(
    editor: &mut Editor<User, S>,
    first_name: &str,
    last_name: &str,
    phone: &str,
    email: &str,
) {
    editor.set_field(UserField::FirstName, first_name.to_string());
    editor.set_field(UserField::LastName, last_name.to_string());
    editor.set_field(UserField::Phone, phone.to_string());
    editor.set_field(UserField::Email, email.to_string());
}
