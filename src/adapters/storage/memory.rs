use crate::core::{Location, LocationStore, NewLocation, Result};
use crate::domain::model::LocationId;
use crate::utils::error::LocationError;
use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use std::collections::HashSet;
use tokio::sync::RwLock;

/// Rows in insertion order plus the uniqueness rule on `name`.
///
/// Shared by the in-memory and file-backed stores so both enforce the same
/// constraint the service relies on. `next_id` only ever grows, so an id is
/// never handed out twice, even after the highest row is deleted.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct LocationTable {
    next_id: LocationId,
    rows: Vec<Location>,
}

impl Default for LocationTable {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: Vec::new(),
        }
    }
}

impl LocationTable {
    /// Rebuild a table from stored rows, rejecting duplicate names.
    ///
    /// `next_id` is raised past the highest stored id if it lags behind it.
    pub(crate) fn from_parts(next_id: LocationId, rows: Vec<Location>) -> Result<Self> {
        let mut seen = HashSet::new();
        if let Some(dup) = rows.iter().find(|l| !seen.insert(l.name.as_str())) {
            return Err(LocationError::storage(format!(
                "duplicate location name '{}'",
                dup.name
            )));
        }

        let past_max = rows.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        Ok(Self {
            next_id: next_id.max(past_max),
            rows,
        })
    }

    pub(crate) fn rows(&self) -> &[Location] {
        &self.rows
    }

    pub(crate) fn insert(&mut self, location: NewLocation) -> Result<Location> {
        if self.contains(&location.name) {
            return Err(LocationError::DuplicateNameError {
                name: location.name,
            });
        }
        let stored = location.into_location(self.next_id, Utc::now());
        self.next_id += 1;
        self.rows.push(stored.clone());
        Ok(stored)
    }

    pub(crate) fn find(&self, name: &str) -> Result<Location> {
        self.rows
            .iter()
            .find(|l| l.name == name)
            .cloned()
            .ok_or_else(|| LocationError::NotFoundError {
                name: name.to_string(),
            })
    }

    /// Returns how many rows were removed (0 or 1).
    pub(crate) fn remove(&mut self, name: &str) -> usize {
        let before = self.rows.len();
        self.rows.retain(|l| l.name != name);
        before - self.rows.len()
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.rows.iter().any(|l| l.name == name)
    }
}

/// 純記憶體儲存，程序結束即消失
#[derive(Debug, Default)]
pub struct InMemoryLocationStore {
    table: RwLock<LocationTable>,
}

impl InMemoryLocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows().len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl LocationStore for InMemoryLocationStore {
    async fn create(&self, location: NewLocation) -> Result<Location> {
        self.table.write().await.insert(location)
    }

    async fn get_all(&self) -> Result<Vec<Location>> {
        Ok(self.table.read().await.rows().to_vec())
    }

    async fn get_by_name(&self, name: &str) -> Result<Location> {
        self.table.read().await.find(name)
    }

    async fn delete_by_name(&self, name: &str) -> Result<()> {
        let removed = self.table.write().await.remove(name);
        tracing::debug!("Removed {} row(s) named '{}'", removed, name);
        Ok(())
    }

    async fn name_exists(&self, name: &str) -> Result<bool> {
        Ok(self.table.read().await.contains(name))
    }
}
