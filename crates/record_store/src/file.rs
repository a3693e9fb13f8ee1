//! Single-file JSON record store.
//!
//! Durable enough for a command-line tool: the whole store is one JSON
//! document, loaded when opened and rewritten after every mutation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::errors::StorageError;
use crate::models::{InvocationLogRecord, WebhookId, WebhookRecord};
use crate::{InvocationLogStore, StoreResult, WebhookStore};

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;

/// On-disk shape of the store file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    webhooks: Vec<WebhookRecord>,
    logs: Vec<InvocationLogRecord>,
}

/// Record store persisted as one JSON file.
///
/// All records are held in memory behind an async `RwLock`; every mutation
/// rewrites the file before returning, so a successful insert or append is
/// durable. Concurrent appends serialize on the lock.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    state: RwLock<StoreDocument>,
}

impl JsonFileStore {
    /// Opens the store at `path`, creating an empty store when the file does
    /// not exist yet.
    ///
    /// # Errors
    /// Returns [`StorageError::ReadFailed`] when the file exists but cannot
    /// be read or parsed.
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let state = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|err| StorageError::ReadFailed(format!("{}: {err}", path.display())))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "store file not found, starting empty");
                StoreDocument::default()
            }
            Err(err) => {
                return Err(StorageError::ReadFailed(format!(
                    "{}: {err}",
                    path.display()
                )))
            }
        };

        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    /// Writes the current state back to disk. Called with the write lock
    /// held so mutations and their persistence stay atomic per call.
    async fn persist(&self, state: &StoreDocument) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(state)
            .map_err(|err| StorageError::WriteRejected(err.to_string()))?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|err| {
                StorageError::WriteRejected(format!("{}: {err}", self.path.display()))
            })?;
        debug!(path = %self.path.display(), "store file written");
        Ok(())
    }
}

#[async_trait]
impl WebhookStore for JsonFileStore {
    async fn insert(&self, record: WebhookRecord) -> StoreResult<()> {
        let mut state = self.state.write().await;
        state.webhooks.push(record);
        let result = self.persist(&state).await;
        if result.is_err() {
            state.webhooks.pop();
        }
        result
    }

    async fn list_for_owner(&self, owner: &str) -> StoreResult<Vec<WebhookRecord>> {
        let state = self.state.read().await;
        let mut records: Vec<WebhookRecord> = state
            .webhooks
            .iter()
            .rev()
            .filter(|r| r.owner_id == owner)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn delete_for_owner(
        &self,
        owner: &str,
        id: WebhookId,
    ) -> StoreResult<Option<WebhookRecord>> {
        let mut state = self.state.write().await;
        let position = state
            .webhooks
            .iter()
            .position(|r| r.id == id && r.owner_id == owner);

        let Some(index) = position else {
            return Ok(None);
        };

        let removed = state.webhooks.remove(index);
        match self.persist(&state).await {
            Ok(()) => Ok(Some(removed)),
            Err(err) => {
                state.webhooks.insert(index, removed);
                Err(err)
            }
        }
    }
}

#[async_trait]
impl InvocationLogStore for JsonFileStore {
    async fn append(&self, record: InvocationLogRecord) -> StoreResult<()> {
        let mut state = self.state.write().await;
        state.logs.push(record);
        let result = self.persist(&state).await;
        if result.is_err() {
            state.logs.pop();
        }
        result
    }

    async fn recent_for_owner(
        &self,
        owner: &str,
        limit: usize,
    ) -> StoreResult<Vec<InvocationLogRecord>> {
        let state = self.state.read().await;
        let mut records: Vec<InvocationLogRecord> = state
            .logs
            .iter()
            .rev()
            .filter(|r| r.owner_id == owner)
            .cloned()
            .collect();
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
        let state = self.state.read().await;
        let mut records: Vec<InvocationLogRecord> = state
            .logs
            .iter()
            .rev()
            .filter(|r| r.owner_id == owner && r.webhook_id == webhook_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(limit);
        Ok(records)
    }
}
