//! In-memory record store.
//!
//! Process-local implementation of both store traits, used by the test
//! suites and by short-lived tooling that does not need durability.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{InvocationLogRecord, WebhookId, WebhookRecord};
use crate::{InvocationLogStore, StoreResult, WebhookStore};

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;

/// Record store backed by process memory.
///
/// Records live in `RwLock`-protected vectors, so concurrent appends are
/// safe and readers never block each other. All contents are lost when the
/// value is dropped.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    webhooks: RwLock<Vec<WebhookRecord>>,
    logs: RwLock<Vec<InvocationLogRecord>>,
}

impl MemoryRecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Collects matching records in reverse insertion order.
///
/// The callers stable-sort the result by creation time descending, so
/// records with identical timestamps still come back most recently inserted
/// first.
fn newest_first<T, F>(records: &[T], mut matches: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    records.iter().rev().filter(|r| matches(r)).cloned().collect()
}

#[async_trait]
impl WebhookStore for MemoryRecordStore {
    async fn insert(&self, record: WebhookRecord) -> StoreResult<()> {
        debug!(webhook_id = %record.id, owner = %record.owner_id, "storing webhook record");
        self.webhooks.write().await.push(record);
        Ok(())
    }

    async fn list_for_owner(&self, owner: &str) -> StoreResult<Vec<WebhookRecord>> {
        let guard = self.webhooks.read().await;
        let mut records = newest_first(&guard, |r: &WebhookRecord| r.owner_id == owner);
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn delete_for_owner(
        &self,
        owner: &str,
        id: WebhookId,
    ) -> StoreResult<Option<WebhookRecord>> {
        let mut guard = self.webhooks.write().await;
        let position = guard
            .iter()
            .position(|r| r.id == id && r.owner_id == owner);
        Ok(position.map(|index| guard.remove(index)))
    }
}

#[async_trait]
impl InvocationLogStore for MemoryRecordStore {
    async fn append(&self, record: InvocationLogRecord) -> StoreResult<()> {
        debug!(entry_id = %record.id, webhook_id = %record.webhook_id, "appending log record");
        self.logs.write().await.push(record);
        Ok(())
    }

    async fn recent_for_owner(
        &self,
        owner: &str,
        limit: usize,
    ) -> StoreResult<Vec<InvocationLogRecord>> {
        let guard = self.logs.read().await;
        let mut records = newest_first(&guard, |r: &InvocationLogRecord| r.owner_id == owner);
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(limit);
        Ok(records)
    }

    async fn for_webhook(
        &self,
        owner: &str,
        webhook_id: WebhookId,
        limit: usize,
    ) -> StoreResult<Vec<InvocationLogRecord>> {
        let guard = self.logs.read().await;
        let mut records = newest_first(&guard, |r: &InvocationLogRecord| {
            r.owner_id == owner && r.webhook_id == webhook_id
        });
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(limit);
        Ok(records)
    }
}
