pub mod loader;
pub mod seed;

use async_trait::async_trait;
use ledgerdesk_core::{DataProvider, Record, Result};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

pub use loader::{LoadState, Loader};

/// Record source kept entirely in process memory, in insertion order.
pub struct InMemoryProvider<T: Record> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> Default for InMemoryProvider<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> InMemoryProvider<T> {
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    pub fn seeded(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn upsert<T: Record>(records: &mut Vec<T>, record: T) {
    let id = record.id();
    match records.iter().position(|existing| existing.id() == id) {
        Some(index) => {
            records[index] = record;
            debug!(kind = T::KIND, %id, "record updated");
        }
        None => {
            records.push(record);
            debug!(kind = T::KIND, %id, "record inserted");
        }
    }
}

#[async_trait]
impl<T: Record> DataProvider<T> for InMemoryProvider<T> {
    async fn list(&self) -> Result<Vec<T>> {
        let records = self.records.read().await;
        Ok(records.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<T>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|record| record.id() == id).cloned())
    }

    async fn save(&self, record: T) -> Result<T> {
        let mut records = self.records.write().await;
        upsert(&mut records, record.clone());
        Ok(record)
    }

    /// Applies the whole batch under one write lock, so readers never see
    /// half of it.
    async fn save_all(&self, batch: Vec<T>) -> Result<Vec<T>> {
        let mut records = self.records.write().await;
        for record in batch.iter().cloned() {
            upsert(&mut records, record);
        }
        Ok(batch)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|record| record.id() != id);
        let removed = records.len() != before;
        if removed {
            debug!(kind = T::KIND, %id, "record deleted");
        }
        Ok(removed)
    }
}
