use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use anyhow::Context as _;
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use crate::core::{
    record::{Record, RecordId},
    store::KeyValueStore,
};

/// Write of a collection snapshot that has not reached the store yet.
///
/// The in-memory collection is already updated when this is returned; awaiting
/// it performs the store write. Dropping it without awaiting skips the write.
#[must_use = "the store is only written when the pending write is awaited"]
pub struct PendingWrite(Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'static>>);

impl PendingWrite {
    fn new(fut: impl Future<Output = anyhow::Result<()>> + Send + 'static) -> Self {
        Self(Box::pin(fut))
    }

    /// Awaits the write, logging a failure instead of returning it.
    pub async fn best_effort(self) {
        if let Err(e) = self.await {
            error!("Failed to save collection: {:#}", e);
        }
    }
}

impl Future for PendingWrite {
    type Output = anyhow::Result<()>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.0.as_mut().poll(cx)
    }
}

impl std::fmt::Debug for PendingWrite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingWrite").finish_non_exhaustive()
    }
}

/// Ordered in-memory records of one variant, mirrored to a store key.
///
/// Every mutation bumps a generation number. Pending writes take the write
/// gate before touching the store and skip themselves if a newer generation
/// is already stored, so the store never goes back to an older snapshot
/// whatever order the writes are awaited in.
#[derive(Debug, Clone)]
pub struct Collection<R: Record, S: KeyValueStore> {
    store: Arc<S>,
    records: Vec<R>,
    generation: u64,
    /// Generation of the last snapshot that reached the store.
    committed: Arc<Mutex<u64>>,
}

impl<R: Record, S: KeyValueStore> Collection<R, S> {
    /// Reads the persisted collection. Never fails: a missing key, an
    /// unreadable store or a malformed payload all start empty.
    pub async fn load(store: Arc<S>) -> Self {
        let records = match store.get_item(R::STORAGE_KEY).await {
            Ok(Some(json)) => match serde_json::from_str::<Vec<R>>(&json) {
                Ok(records) => records,
                Err(e) => {
                    warn!(key = R::STORAGE_KEY, "Ignoring malformed stored collection: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                error!(key = R::STORAGE_KEY, "Failed to load collection: {:#}", e);
                Vec::new()
            }
        };
        debug!(key = R::STORAGE_KEY, count = records.len(), "loaded collection");
        Self {
            store,
            records,
            generation: 0,
            committed: Arc::new(Mutex::new(0)),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Replaces the in-memory records with `list` and returns the write of the
    /// whole list.
    pub fn save(&mut self, list: Vec<R>) -> PendingWrite {
        self.records = list;
        self.generation += 1;
        let generation = self.generation;
        let json = serde_json::to_string(&self.records);
        let store = self.store.clone();
        let committed = self.committed.clone();
        let count = self.records.len();
        PendingWrite::new(async move {
            let json = json.with_context(|| format!("Failed to serialize {}", R::STORAGE_KEY))?;
            let mut committed = committed.lock().await;
            if *committed >= generation {
                debug!(key = R::STORAGE_KEY, generation, "skipping superseded write");
                return Ok(());
            }
            store.set_item(R::STORAGE_KEY, json).await?;
            *committed = generation;
            debug!(key = R::STORAGE_KEY, count, generation, "saved collection");
            Ok(())
        })
    }

    pub fn add(&mut self, record: R) -> PendingWrite {
        let mut list = self.records.clone();
        list.push(record);
        self.save(list)
    }

    /// Replaces the record with identifier `id` in place. `record` is given
    /// `id` regardless of the identifier it carried.
    pub fn update(&mut self, id: &RecordId, mut record: R) -> PendingWrite {
        record.set_id(id.clone());
        let list = self
            .records
            .iter()
            .map(|r| if r.id() == id { record.clone() } else { r.clone() })
            .collect();
        self.save(list)
    }

    pub fn remove(&mut self, id: &RecordId) -> PendingWrite {
        let list = self.records.iter().filter(|r| r.id() != id).cloned().collect();
        self.save(list)
    }
}
