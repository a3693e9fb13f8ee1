//! Record store contracts for HookHarness.
//!
//! This crate defines the persistence boundary consumed by the core: record
//! types for webhook definitions and invocation log entries, the store traits
//! the core depends on, and two reference implementations.
//!
//! ## Architecture
//!
//! The core depends on the [`WebhookStore`] and [`InvocationLogStore`] traits
//! only; a deployment decides which implementation backs them:
//! - [`MemoryRecordStore`] - process-local, used by tests and short-lived tools
//! - [`JsonFileStore`] - a single-file JSON store for the CLI
//!
//! Both traits enforce owner scoping at the query level: every read and
//! delete takes the owner identifier and never returns another owner's
//! records. Webhook records are immutable once inserted, and log records are
//! append-only; neither store exposes an update operation.
//!
//! Deleting a webhook record never touches its log records. The log is an
//! independent audit trail and may reference definitions that no longer
//! exist.

use async_trait::async_trait;

mod errors;
mod file;
mod memory;
pub mod models;

pub use errors::StorageError;
pub use file::JsonFileStore;
pub use memory::MemoryRecordStore;
pub use models::{
    HttpMethod, InvocationLogRecord, InvocationStatus, LogEntryId, ResponsePayload, WebhookId,
    WebhookRecord,
};

/// Result type for record store operations.
pub type StoreResult<T> = std::result::Result<T, StorageError>;

/// Storage contract for webhook definition records.
///
/// Implementations must scope every read and delete to the supplied owner
/// identifier. A caller can never observe, or remove, records it does not
/// own.
#[async_trait]
pub trait WebhookStore: Send + Sync {
    /// Stores one new webhook record.
    ///
    /// Records are immutable: an insert never replaces an existing record,
    /// and ids are assigned by the caller before insertion.
    ///
    /// # Errors
    /// Returns [`StorageError::WriteRejected`] if the record cannot be stored.
    async fn insert(&self, record: WebhookRecord) -> StoreResult<()>;

    /// Returns all webhook records for the owner, most recently created
    /// first.
    ///
    /// Returns an empty vector when the owner has no records.
    async fn list_for_owner(&self, owner: &str) -> StoreResult<Vec<WebhookRecord>>;

    /// Removes the record with the given id if it belongs to the owner.
    ///
    /// Returns the removed record, or `None` when no such record exists for
    /// that owner. A record owned by someone else yields `None`, exactly as
    /// if it did not exist.
    async fn delete_for_owner(&self, owner: &str, id: WebhookId)
        -> StoreResult<Option<WebhookRecord>>;
}

/// Storage contract for invocation log records.
///
/// The log is append-only: records are never updated or deleted through this
/// trait, and implementations must tolerate concurrent appends.
#[async_trait]
pub trait InvocationLogStore: Send + Sync {
    /// Appends one log record. Every call stores exactly one record; there
    /// is no deduplication.
    ///
    /// # Errors
    /// Returns [`StorageError::WriteRejected`] if the record cannot be stored.
    async fn append(&self, record: InvocationLogRecord) -> StoreResult<()>;

    /// Returns the owner's most recent log records, newest first, truncated
    /// to `limit` entries.
    async fn recent_for_owner(
        &self,
        owner: &str,
        limit: usize,
    ) -> StoreResult<Vec<InvocationLogRecord>>;

    /// Returns the owner's log records for one webhook, newest first,
    /// truncated to `limit` entries.
    ///
    /// The webhook id is a weak reference: records remain retrievable after
    /// the definition itself has been deleted.
    async fn for_webhook(
        &self,
        owner: &str,
        webhook_id: WebhookId,
        limit: usize,
    ) -> StoreResult<Vec<InvocationLogRecord>>;
}
