//! The record screen's behavior without any widgets: one collection, one
//! form, and the flows that tie them together.

use std::sync::Arc;

use tracing::debug;

use crate::{
    core::{Collection, Draft, KeyValueStore, PendingWrite, Record, RecordId},
    form::{FormController, SubmitOutcome},
    presentation::{ListView, Notice},
};

#[derive(Debug, Clone)]
pub struct Editor<R: Record, S: KeyValueStore> {
    collection: Collection<R, S>,
    form: FormController<R>,
}

impl<R: Record, S: KeyValueStore> Editor<R, S> {
    pub async fn load(store: Arc<S>) -> Self {
        Self {
            collection: Collection::load(store).await,
            form: FormController::new(),
        }
    }

    pub fn records(&self) -> &[R] {
        self.collection.records()
    }

    pub fn form(&self) -> &FormController<R> {
        &self.form
    }

    pub fn list_view(&self) -> ListView<'_, R> {
        ListView::new(self.collection.records())
    }

    pub fn set_field(&mut self, field: <R::Draft as Draft>::Field, value: String) {
        self.form.set_field(field, value);
    }

    /// Loads the record with `id` into the form. Returns false if there is no
    /// such record.
    pub fn edit(&mut self, id: &RecordId) -> bool {
        match self.collection.get(id) {
            Some(record) => {
                self.form.begin_edit(record);
                true
            }
            None => false,
        }
    }

    /// Submits the form. A validation failure yields only the notice to show.
    pub fn submit(&mut self) -> (Notice, Option<PendingWrite>) {
        match self.form.submit(&mut self.collection) {
            Ok(submitted) => {
                let notice = match submitted.outcome {
                    SubmitOutcome::Added(_) => Notice::Added,
                    SubmitOutcome::Updated(_) => Notice::Updated,
                };
                (notice, Some(submitted.write))
            }
            Err(e) => {
                debug!("rejected submission: {}", e);
                (Notice::Invalid(e), None)
            }
        }
    }

    /// The question to ask before [`Editor::confirm_delete`], or `None` if
    /// there is nothing to delete.
    pub fn request_delete(&self, id: &RecordId) -> Option<Notice> {
        self.collection.get(id).map(|_| Notice::ConfirmDelete)
    }

    pub fn confirm_delete(&mut self, id: &RecordId) -> (Notice, PendingWrite) {
        let write = self.collection.remove(id);
        self.form.forget(id);
        (Notice::Deleted, write)
    }
}
