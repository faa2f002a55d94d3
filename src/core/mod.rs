pub mod collection;
pub mod error;
pub mod record;
pub mod store;

pub use collection::{Collection, PendingWrite};
pub use error::ValidationError;
pub use record::{Draft, Item, ItemDraft, ItemField, Record, RecordId, User, UserDraft, UserField};
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
