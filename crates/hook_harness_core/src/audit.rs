//! Audit log operations.
//!
//! Append-only persistence and bounded retrieval of invocation log records.
//! Entries are written by the invocation engine and read back for display;
//! nothing ever updates or deletes them.

use std::sync::Arc;

use auth_session::Session;
use record_store::{InvocationLogRecord, InvocationLogStore, StorageError, WebhookId};
use tracing::debug;

use crate::errors::{RegistryResult, ValidationError};

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;

/// Default bound for log retrieval.
pub const DEFAULT_LOG_LIMIT: usize = 100;

/// Append-only view over the invocation log store.
pub struct AuditLog {
    /// Store holding the log records
    store: Arc<dyn InvocationLogStore>,
}

impl AuditLog {
    /// Creates an audit log over the given store.
    pub fn new(store: Arc<dyn InvocationLogStore>) -> Self {
        Self { store }
    }

    /// Appends one log record. Every call stores exactly one record.
    ///
    /// # Errors
    /// Returns the store's [`StorageError`] unchanged; the engine decides
    /// how to surface it relative to the invocation outcome.
    pub async fn append(&self, entry: InvocationLogRecord) -> Result<(), StorageError> {
        debug!(entry_id = %entry.id, status = %entry.status, "appending audit entry");
        self.store.append(entry).await
    }

    /// Returns the caller's most recent entries, newest first, truncated to
    /// `limit`.
    ///
    /// An owner with no entries gets an empty vector, not an error.
    ///
    /// # Errors
    /// Fails validation when `limit` is zero; a bound of at least one is
    /// required.
    pub async fn recent(
        &self,
        session: &Session,
        limit: usize,
    ) -> RegistryResult<Vec<InvocationLogRecord>> {
        Self::check_limit(limit)?;
        let records = self
            .store
            .recent_for_owner(session.owner().as_str(), limit)
            .await?;
        Ok(records)
    }

    /// Returns the caller's entries for one webhook, newest first,
    /// truncated to `limit`.
    ///
    /// Works for deleted definitions too: the webhook id on a log record is
    /// a weak reference and stays queryable after the definition is gone.
    ///
    /// # Errors
    /// Fails validation when `limit` is zero.
    pub async fn for_webhook(
        &self,
        session: &Session,
        webhook_id: WebhookId,
        limit: usize,
    ) -> RegistryResult<Vec<InvocationLogRecord>> {
        Self::check_limit(limit)?;
        let records = self
            .store
            .for_webhook(session.owner().as_str(), webhook_id, limit)
            .await?;
        Ok(records)
    }

    fn check_limit(limit: usize) -> Result<(), ValidationError> {
        if limit == 0 {
            return Err(ValidationError::invalid_format(
                "limit",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
