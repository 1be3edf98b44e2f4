//! JSON-snapshot store.
//!
//! The snapshot file is the source of truth. Every call re-reads it, and every
//! mutation is a read-modify-write under this handle's write lock, so another
//! handle on the same file (the CLI next to a running server) never has its
//! rows overwritten by a stale in-memory copy.

use super::memory::LocationTable;
use crate::core::{Location, LocationStore, NewLocation, Result, Storage};
use crate::domain::model::LocationId;
use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;

/// On-disk layouts. Older snapshots are a bare array of rows.
#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Table {
        next_id: LocationId,
        rows: Vec<Location>,
    },
    Rows(Vec<Location>),
}

pub struct FileLocationStore<S: Storage> {
    storage: S,
    file_name: String,
    lock: RwLock<()>,
}

impl<S: Storage> FileLocationStore<S> {
    /// Open the snapshot at `file_name`, starting empty when it does not exist.
    ///
    /// The snapshot is checked here so a corrupt file fails at startup.
    pub async fn open(storage: S, file_name: impl Into<String>) -> Result<Self> {
        let store = Self {
            storage,
            file_name: file_name.into(),
            lock: RwLock::new(()),
        };
        let table = store.load().await?;
        tracing::info!("Loaded {} locations from {}", table.rows().len(), store.file_name);
        Ok(store)
    }

    async fn load(&self) -> Result<LocationTable> {
        let snapshot: Snapshot = match self.storage.read_file(&self.file_name).await? {
            Some(bytes) if !bytes.is_empty() => serde_json::from_slice(&bytes)?,
            _ => return Ok(LocationTable::default()),
        };
        let (next_id, rows) = match snapshot {
            Snapshot::Table { next_id, rows } => (next_id, rows),
            Snapshot::Rows(rows) => (1, rows),
        };
        LocationTable::from_parts(next_id, rows)
    }

    async fn persist(&self, table: &LocationTable) -> Result<()> {
        let data = serde_json::to_vec_pretty(table)?;
        self.storage.write_file(&self.file_name, &data).await
    }
}

#[async_trait]
impl<S: Storage> LocationStore for FileLocationStore<S> {
    async fn create(&self, location: NewLocation) -> Result<Location> {
        let _guard = self.lock.write().await;
        let mut table = self.load().await?;
        let stored = table.insert(location)?;
        self.persist(&table).await?;
        Ok(stored)
    }

    async fn get_all(&self) -> Result<Vec<Location>> {
        let _guard = self.lock.read().await;
        Ok(self.load().await?.rows().to_vec())
    }

    async fn get_by_name(&self, name: &str) -> Result<Location> {
        let _guard = self.lock.read().await;
        self.load().await?.find(name)
    }

    async fn delete_by_name(&self, name: &str) -> Result<()> {
        let _guard = self.lock.write().await;
        let mut table = self.load().await?;
        if table.remove(name) == 0 {
            return Ok(());
        }
        self.persist(&table).await
    }

    async fn name_exists(&self, name: &str) -> Result<bool> {
        let _guard = self.lock.read().await;
        Ok(self.load().await?.contains(name))
    }
}
