use serde::{Deserialize, Serialize};

use crate::core::{
    error::ValidationError,
    record::{Draft, Record, RecordId},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: RecordId,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Name,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
}

impl Draft for ItemDraft {
    type Field = ItemField;

    fn get(&self, field: ItemField) -> &str {
        match field {
            ItemField::Name => &self.name,
        }
    }

    fn set(&mut self, field: ItemField, value: String) {
        match field {
            ItemField::Name => self.name = value,
        }
    }
}

impl Record for Item {
    type Draft = ItemDraft;

    const STORAGE_KEY: &'static str = "items";
    const NOUN: &'static str = "Item";
    const FIELDS: &'static [ItemField] = &[ItemField::Name];

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn field_label(field: ItemField) -> &'static str {
        match field {
            ItemField::Name => "Name",
        }
    }

    fn field_value(&self, field: ItemField) -> &str {
        match field {
            ItemField::Name => &self.name,
        }
    }

    /// Stores the trimmed name.
    fn from_draft(id: RecordId, draft: &ItemDraft) -> Result<Self, ValidationError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Item {
            id,
            name: name.to_string(),
        })
    }
}
