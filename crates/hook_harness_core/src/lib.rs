//! # HookHarness Core
//!
//! This crate provides the webhook invocation and audit engine for
//! HookHarness, a manual "fire and observe" tool for outbound HTTP
//! webhooks: register a target, trigger it with an ad-hoc JSON payload,
//! and review what happened.
//!
//! ## Overview
//!
//! The core handles the complete trigger workflow:
//! 1. Definitions are registered and listed through [`WebhookRegistry`]
//! 2. [`InvocationEngine`] performs one HTTP call per trigger and
//!    classifies the outcome
//! 3. Every attempt - including ones that never reach the network - is
//!    appended to the [`AuditLog`]
//! 4. [`reorder`] rearranges an already-fetched list for presentation only
//!
//! ## Architecture
//!
//! The crate follows a dependency injection pattern for testability:
//! - `record_store::WebhookStore` / `record_store::InvocationLogStore`
//!   traits for persistence
//! - `auth_session::IdentityProvider` for resolving the caller, whose
//!   [`auth_session::Session`] is threaded explicitly into every call
//!
//! There is no retry, signing, templating, scheduling, or rate limiting:
//! every trigger is a single attempt whose outcome is recorded as-is.
//!
//! ## Error Handling
//!
//! Registry-path failures surface directly to the caller with no persisted
//! side effect. Invocation-path failures (transport errors, unparseable
//! payloads) are absorbed into the audit trail as `error` entries; see
//! [`InvokeError`] for the one deliberate exception.
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use auth_session::{IdentityProvider, StaticIdentityProvider, OwnerId};
//! use hook_harness_core::{AuditLog, InvocationEngine, WebhookRegistry, DEFAULT_LOG_LIMIT};
//! use record_store::{HttpMethod, MemoryRecordStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(MemoryRecordStore::new());
//! let registry = WebhookRegistry::new(store.clone());
//! let audit = AuditLog::new(store.clone());
//! let engine = InvocationEngine::new(AuditLog::new(store));
//!
//! let provider = StaticIdentityProvider::new(OwnerId::new("user-1")?);
//! let session = provider.session().await?;
//!
//! let webhook = registry
//!     .create(&session, "Test", "https://example.com/hook", HttpMethod::Post)
//!     .await?;
//! let entry = engine.invoke(&session, &webhook, r#"{"ok": true}"#).await?;
//! println!("{}: {}", entry.created_at, entry.status);
//!
//! let history = audit.recent(&session, DEFAULT_LOG_LIMIT).await?;
//! assert_eq!(history.len(), 1);
//! # Ok(())
//! # }
//! ```

mod errors;

// Re-export error types for public API
pub use errors::{InvokeError, RegistryError, RegistryResult, ValidationError};

/// Webhook domain types (WebhookName, TargetUrl)
pub mod webhook;

/// Webhook definition CRUD
pub mod registry;

/// One-shot invocation execution and classification
pub mod invocation;

/// Append-only log persistence and retrieval
pub mod audit;

/// Presentation-only sequence reordering
pub mod ordering;

// Re-export commonly used types
pub use audit::{AuditLog, DEFAULT_LOG_LIMIT};
pub use invocation::InvocationEngine;
pub use ordering::{reorder, OrderingError};
pub use registry::WebhookRegistry;
pub use webhook::{TargetUrl, WebhookName};

// Record and identity types, re-exported so most callers need only this
// crate.
pub use auth_session::{AuthError, OwnerId, Session};
pub use record_store::{
    HttpMethod, InvocationLogRecord, InvocationStatus, LogEntryId, ResponsePayload, StorageError,
    WebhookId, WebhookRecord,
};
