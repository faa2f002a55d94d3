mod item;
mod user;

use std::fmt;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use uuid::Uuid;

use crate::core::error::ValidationError;

pub use item::{Item, ItemDraft, ItemField};
pub use user::{User, UserDraft, UserField};

/// Opaque record identifier.
///
/// New identifiers are random UUIDs. Anything already in storage is accepted
/// verbatim, including the millisecond timestamps older data used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw form input for one record variant, one string per field.
pub trait Draft: Default + Clone + fmt::Debug + Send + 'static {
    type Field: Copy + Eq + fmt::Debug + Send + Sync + 'static;

    fn get(&self, field: Self::Field) -> &str;
    fn set(&mut self, field: Self::Field, value: String);
}

/// A record variant that can live in a [`Collection`](crate::core::Collection).
pub trait Record:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Draft: Draft;

    /// Storage key holding the JSON array of every record of this variant.
    const STORAGE_KEY: &'static str;
    /// Singular display noun, e.g. "User".
    const NOUN: &'static str;
    /// Editable fields in display order.
    const FIELDS: &'static [<Self::Draft as Draft>::Field];

    fn id(&self) -> &RecordId;
    fn set_id(&mut self, id: RecordId);

    fn field_label(field: <Self::Draft as Draft>::Field) -> &'static str;
    fn field_value(&self, field: <Self::Draft as Draft>::Field) -> &str;

    /// Copies the record's current values into a fresh draft.
    fn to_draft(&self) -> Self::Draft {
        let mut draft = Self::Draft::default();
        for &field in Self::FIELDS {
            draft.set(field, self.field_value(field).to_string());
        }
        draft
    }

    /// Validates `draft` and builds a record carrying `id`.
    fn from_draft(id: RecordId, draft: &Self::Draft) -> Result<Self, ValidationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct() {
        let ids: std::collections::HashSet<_> = (0..1000).map(|_| RecordId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = RecordId::from("1718000000000");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""1718000000000""#);
        let back: RecordId = serde_json::from_str(r#""abc""#).unwrap();
        assert_eq!(back.as_str(), "abc");
    }
}
