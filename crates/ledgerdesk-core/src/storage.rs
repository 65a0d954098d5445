use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;

/// A row held by a record source, addressed by its id.
pub trait Record: Clone + Send + Sync + 'static {
    const KIND: &'static str;

    fn id(&self) -> Uuid;
}

#[async_trait]
pub trait DataProvider<T: Record>: Send + Sync {
    /// All records in insertion order.
    async fn list(&self) -> Result<Vec<T>>;
    async fn get(&self, id: Uuid) -> Result<Option<T>>;
    /// Replaces the record with the same id in place, or appends it.
    async fn save(&self, record: T) -> Result<T>;
    /// Saves a batch of records. Implementations that can write the batch
    /// as one step should override this; the default saves one at a time.
    async fn save_all(&self, records: Vec<T>) -> Result<Vec<T>> {
        let mut saved = Vec::with_capacity(records.len());
        for record in records {
            saved.push(self.save(record).await?);
        }
        Ok(saved)
    }
    async fn delete(&self, id: Uuid) -> Result<bool>;
}
