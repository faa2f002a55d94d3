//! Key-value persistence for record collections.
//!
//! A store maps a fixed key (one per record variant) to a single JSON string
//! holding the whole collection. Collections only ever read or overwrite the
//! full value, so the trait has no partial-update or delete operations.

mod memory;
mod sqlite;

use std::future::Future;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub trait KeyValueStore: Send + Sync + std::fmt::Debug + 'static {
    /// Returns `Ok(None)` if the key has never been written.
    fn get_item(&self, key: &str) -> impl Future<Output = anyhow::Result<Option<String>>> + Send;

    /// Inserts or overwrites the value stored under `key`.
    fn set_item(&self, key: &str, value: String)
    -> impl Future<Output = anyhow::Result<()>> + Send;
}
