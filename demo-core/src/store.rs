use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Record;

/// Process-local collection owned by a single service.
///
/// Clones share the same underlying list. Records are only ever appended.
#[derive(Debug)]
pub struct MemoryStore<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T: Clone> MemoryStore<T> {
    pub fn new(seed: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(seed)),
        }
    }

    /// Snapshot of every record in insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    pub async fn insert(&self, record: T) -> T {
        let mut records = self.records.write().await;
        records.push(record.clone());
        record
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl<T: Clone + Record> MemoryStore<T> {
    /// First record with the given identifier. Identifiers are unique only by convention.
    pub async fn get(&self, id: &str) -> Option<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }
}
