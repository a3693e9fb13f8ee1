//! Error types for record store operations.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors produced by a record store implementation.
///
/// Store errors are deliberately coarse: the core reports them to the end
/// user as a generic storage failure, but the detail string is preserved for
/// logs and diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The store refused or failed to persist a record.
    #[error("Record store rejected the write: {0}")]
    WriteRejected(String),

    /// The store failed to produce the requested records.
    #[error("Record store read failed: {0}")]
    ReadFailed(String),
}
