//! Form state for creating or editing one record.

use tracing::debug;

use crate::core::{Collection, Draft, KeyValueStore, PendingWrite, Record, RecordId, ValidationError};

/// Whether a submission creates a new record or replaces an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(RecordId),
}

/// What a successful submission did to the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(RecordId),
    Updated(RecordId),
}

#[derive(Debug)]
pub struct Submitted {
    pub outcome: SubmitOutcome,
    pub write: PendingWrite,
}

#[derive(Debug, Clone)]
pub struct FormController<R: Record> {
    mode: FormMode,
    draft: R::Draft,
}

impl<R: Record> Default for FormController<R> {
    fn default() -> Self {
        Self {
            mode: FormMode::Creating,
            draft: R::Draft::default(),
        }
    }
}

impl<R: Record> FormController<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft(&self) -> &R::Draft {
        &self.draft
    }

    pub fn is_editing(&self, id: &RecordId) -> bool {
        matches!(&self.mode, FormMode::Editing(target) if target == id)
    }

    pub fn set_field(&mut self, field: <R::Draft as Draft>::Field, value: String) {
        self.draft.set(field, value);
    }

    /// Loads `record` into the form and makes it the edit target.
    pub fn begin_edit(&mut self, record: &R) {
        self.draft = record.to_draft();
        self.mode = FormMode::Editing(record.id().clone());
    }

    pub fn reset(&mut self) {
        self.mode = FormMode::Creating;
        self.draft = R::Draft::default();
    }

    /// Drops the edit target if it is `id`.
    pub fn forget(&mut self, id: &RecordId) {
        if self.is_editing(id) {
            self.reset();
        }
    }

    /// Validates the form and applies it to `collection`.
    ///
    /// On a validation error nothing changes, neither the collection nor the
    /// form. On success the form is back in [`FormMode::Creating`].
    pub fn submit<S: KeyValueStore>(
        &mut self,
        collection: &mut Collection<R, S>,
    ) -> Result<Submitted, ValidationError> {
        let id = match &self.mode {
            FormMode::Editing(id) => id.clone(),
            FormMode::Creating => RecordId::generate(),
        };
        let record = R::from_draft(id.clone(), &self.draft)?;

        let submitted = match &self.mode {
            FormMode::Editing(_) => {
                debug!(%id, "updating record");
                Submitted {
                    write: collection.update(&id, record),
                    outcome: SubmitOutcome::Updated(id),
                }
            }
            FormMode::Creating => {
                debug!(%id, "adding record");
                Submitted {
                    write: collection.add(record),
                    outcome: SubmitOutcome::Added(id),
                }
            }
        };
        self.reset();
        Ok(submitted)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::{MemoryStore, User, UserField};

    fn fill(form: &mut FormController<User>, first: &str, last: &str, phone: &str, email: &str) {
        form.set_field(UserField::FirstName, first.into());
        form.set_field(UserField::LastName, last.into());
        form.set_field(UserField::Phone, phone.into());
        form.set_field(UserField::Email, email.into());
    }

    #[tokio::test]
    async fn invalid_submit_keeps_state() {
        let mut collection: Collection<User, _> = Collection::load(Arc::new(MemoryStore::new())).await;
        let mut form = FormController::<User>::new();
        fill(&mut form, "A", "", "1", "a@b.com");

        let err = form.submit(&mut collection).unwrap_err();
        assert_eq!(err, ValidationError::MissingFields);
        assert!(collection.is_empty());
        assert_eq!(form.draft().first_name, "A");
        assert_eq!(form.mode(), &FormMode::Creating);
    }

    #[tokio::test]
    async fn editing_reuses_target_id() -> anyhow::Result<()> {
        let mut collection: Collection<User, _> = Collection::load(Arc::new(MemoryStore::new())).await;
        let mut form = FormController::<User>::new();
        fill(&mut form, "A", "B", "1", "a@b.com");
        let Submitted { outcome, write } = form.submit(&mut collection)?;
        write.await?;
        let SubmitOutcome::Added(id) = outcome else {
            panic!("expected a new record");
        };

        let record = collection.get(&id).cloned().unwrap();
        form.begin_edit(&record);
        assert_eq!(form.mode(), &FormMode::Editing(id.clone()));
        assert_eq!(form.draft().email, "a@b.com");

        form.set_field(UserField::FirstName, "C".into());
        let submitted = form.submit(&mut collection)?;
        assert_eq!(submitted.outcome, SubmitOutcome::Updated(id.clone()));
        submitted.write.await?;

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.records()[0].first_name, "C");
        assert_eq!(collection.records()[0].id, id);
        assert_eq!(form.mode(), &FormMode::Creating);
        assert_eq!(form.draft().first_name, "");
        Ok(())
    }

    #[test]
    fn forget_only_resets_matching_target() {
        let user = User {
            id: RecordId::from("1"),
            first_name: "A".into(),
            last_name: "B".into(),
            phone: "1".into(),
            email: "a@b.com".into(),
        };
        let mut form = FormController::<User>::new();
        form.begin_edit(&user);

        form.forget(&RecordId::from("2"));
        assert!(form.is_editing(&user.id));

        form.forget(&user.id);
        assert_eq!(form.mode(), &FormMode::Creating);
        assert_eq!(form.draft().last_name, "");
    }
}
