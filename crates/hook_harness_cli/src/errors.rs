//! Error type for the command-line surface.

use auth_session::AuthError;
use hook_harness_core::{InvokeError, RegistryError, StorageError};
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Everything a CLI command can fail with.
#[derive(Debug, Error)]
pub enum Error {
    /// No identity could be resolved for the caller.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A registry or audit operation failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// An invocation could not be completed or recorded.
    #[error(transparent)]
    Invoke(#[from] InvokeError),

    /// The store file could not be opened or written.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A webhook id argument was not a valid identifier.
    #[error("Invalid webhook id: {0}")]
    InvalidId(String),
}
