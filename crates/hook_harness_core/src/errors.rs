//! Error types for the HookHarness core.
//!
//! The taxonomy separates registry-path failures, which surface directly to
//! the caller with no persisted side effect, from invocation-path failures,
//! which are absorbed into the audit trail as `error` entries. The one
//! ambiguous case - an audit append that fails after the network call
//! already completed - gets its own variant so callers can observe it.

use auth_session::AuthError;
use record_store::{InvocationLogRecord, StorageError};
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Result type for registry and audit operations.
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// Malformed input to a registry operation.
///
/// Reported to the caller immediately; no side effect occurs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty.
    #[error("Field '{field}' cannot be empty")]
    EmptyField {
        /// Name of the offending field
        field: String,
    },

    /// A field exceeded its maximum length.
    #[error("Field '{field}' is too long: {actual} characters (max: {max})")]
    TooLong {
        /// Name of the offending field
        field: String,
        /// Actual length
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// A field did not match the expected format.
    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat {
        /// Name of the offending field
        field: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl ValidationError {
    /// Creates an [`ValidationError::EmptyField`] error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField {
            field: field.into(),
        }
    }

    /// Creates a [`ValidationError::TooLong`] error.
    pub fn too_long(field: impl Into<String>, actual: usize, max: usize) -> Self {
        Self::TooLong {
            field: field.into(),
            actual,
            max,
        }
    }

    /// Creates an [`ValidationError::InvalidFormat`] error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors surfaced by registry and audit-read operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Input failed validation; nothing was stored.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No valid owner identity for the call.
    ///
    /// Registry operations take an already-resolved [`auth_session::Session`],
    /// so this crate never produces the variant itself. It exists for
    /// embedders that resolve identity per call and want the provider's
    /// [`AuthError`] to flow through `?` as a registry failure.
    #[error(transparent)]
    AuthRequired(#[from] AuthError),

    /// The target record does not exist for this owner.
    ///
    /// Identical for "does not exist" and "exists but belongs to someone
    /// else", so existence never leaks across owners.
    #[error("Webhook not found")]
    NotFound,

    /// The record store rejected a read or write.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors surfaced by [`crate::InvocationEngine::invoke`].
///
/// Transport and payload-parse failures never appear here: those become
/// `error` log entries and the call returns `Ok`. The only failures a
/// caller sees directly are a missing identity and a lost audit record.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// No valid owner identity for the call.
    ///
    /// As with [`RegistryError::AuthRequired`], the engine itself never
    /// produces this: callers hand it a resolved session. The variant lets
    /// embedders that defer identity resolution convert [`AuthError`] with
    /// `?` instead of wrapping it in their own type.
    #[error(transparent)]
    AuthRequired(#[from] AuthError),

    /// The invocation ran to completion but the audit record could not be
    /// stored. The network call may have succeeded; the un-persisted entry
    /// is carried so the caller can inspect or report the outcome.
    #[error("Invocation completed but the audit record was not stored: {source}")]
    Unrecorded {
        /// The entry that failed to persist
        entry: Box<InvocationLogRecord>,
        /// The underlying store failure
        #[source]
        source: StorageError,
    },
}
