//! Webhook registry operations.
//!
//! This module provides the [`WebhookRegistry`] component owning create,
//! list, and delete over webhook definitions, always scoped to the calling
//! session's owner.

use std::sync::Arc;

use auth_session::Session;
use chrono::Utc;
use record_store::{HttpMethod, WebhookId, WebhookRecord, WebhookStore};
use tracing::{debug, info};

use crate::errors::{RegistryError, RegistryResult};
use crate::webhook::{TargetUrl, WebhookName};

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

/// Owns the set of webhook definitions for authenticated callers.
///
/// Mutations return the affected record directly instead of relying on the
/// caller to refetch; when and whether a list view refreshes is the caller's
/// concern.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use auth_session::{OwnerId, Session};
/// use hook_harness_core::WebhookRegistry;
/// use record_store::{HttpMethod, MemoryRecordStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = WebhookRegistry::new(Arc::new(MemoryRecordStore::new()));
/// let session = Session::new(OwnerId::new("user-1")?);
///
/// let created = registry
///     .create(&session, "Test", "https://example.com/hook", HttpMethod::Post)
///     .await?;
/// let listed = registry.list(&session).await?;
/// assert_eq!(listed.first(), Some(&created));
/// # Ok(())
/// # }
/// ```
pub struct WebhookRegistry {
    /// Store holding the definition records
    store: Arc<dyn WebhookStore>,
}

impl WebhookRegistry {
    /// Creates a registry over the given store.
    pub fn new(store: Arc<dyn WebhookStore>) -> Self {
        Self { store }
    }

    /// Registers a new webhook definition and returns the stored record.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Validation`] when the name is empty/too long or
    ///   the URL is not an absolute http(s) URL; nothing is stored.
    /// - [`RegistryError::Storage`] when the store rejects the write.
    pub async fn create(
        &self,
        session: &Session,
        name: &str,
        url: &str,
        method: HttpMethod,
    ) -> RegistryResult<WebhookRecord> {
        let name = WebhookName::new(name)?;
        let url = TargetUrl::new(url)?;

        let record = WebhookRecord {
            id: WebhookId::new(),
            owner_id: session.owner().as_str().to_string(),
            name: name.as_str().to_string(),
            url: url.as_str().to_string(),
            method,
            created_at: Utc::now(),
        };

        self.store.insert(record.clone()).await?;
        info!(webhook_id = %record.id, name = %record.name, "webhook registered");
        Ok(record)
    }

    /// Lists the caller's webhook definitions, most recently created first.
    ///
    /// Returns an empty vector when the caller has none.
    ///
    /// # Errors
    /// Returns [`RegistryError::Storage`] when the store read fails.
    pub async fn list(&self, session: &Session) -> RegistryResult<Vec<WebhookRecord>> {
        let records = self.store.list_for_owner(session.owner().as_str()).await?;
        debug!(count = records.len(), "listed webhooks");
        Ok(records)
    }

    /// Deletes one of the caller's webhook definitions and returns it.
    ///
    /// Log entries referencing the definition are untouched; the audit
    /// trail is independent of the definition's lifecycle.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when no definition with that id
    /// exists for this owner. Another owner's definition is reported the
    /// same way, never as an access failure.
    pub async fn delete(&self, session: &Session, id: WebhookId) -> RegistryResult<WebhookRecord> {
        let removed = self
            .store
            .delete_for_owner(session.owner().as_str(), id)
            .await?;

        match removed {
            Some(record) => {
                info!(webhook_id = %record.id, name = %record.name, "webhook deleted");
                Ok(record)
            }
            None => Err(RegistryError::NotFound),
        }
    }
}
