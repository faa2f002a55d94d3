mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from recordbook for tests
pub use recordbook::core::{
    Collection, Draft, Item, ItemDraft, ItemField, KeyValueStore, MemoryStore, Record, RecordId,
    SqliteStore, User, UserDraft, UserField, ValidationError,
};
pub use recordbook::{Editor, FormController, FormMode, Notice, SubmitOutcome};
