//! Display ordering.
//!
//! A pure reorder over an already-fetched sequence, used to rearrange a
//! list for presentation only. The result is never persisted; any
//! authoritative refresh from the registry restores creation-time order.

use thiserror::Error;

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod tests;

/// Errors from [`reorder`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderingError {
    /// An index pointed outside the sequence.
    #[error("Index {index} is out of bounds for a sequence of length {len}")]
    OutOfBounds {
        /// The offending index
        index: usize,
        /// Length of the sequence
        len: usize,
    },
}

/// Moves the element at `from` to position `to`, shifting the elements in
/// between.
///
/// All other relative orderings and the total length are preserved, and
/// `reorder(seq, i, i)` returns the sequence unchanged.
///
/// # Errors
/// Returns [`OrderingError::OutOfBounds`] when either index is outside the
/// sequence.
///
/// # Examples
///
/// ```rust
/// use hook_harness_core::reorder;
///
/// let moved = reorder(vec!["a", "b", "c"], 0, 2).unwrap();
/// assert_eq!(moved, vec!["b", "c", "a"]);
/// ```
pub fn reorder<T>(mut sequence: Vec<T>, from: usize, to: usize) -> Result<Vec<T>, OrderingError> {
    let len = sequence.len();
    if from >= len {
        return Err(OrderingError::OutOfBounds { index: from, len });
    }
    if to >= len {
        return Err(OrderingError::OutOfBounds { index: to, len });
    }

    let element = sequence.remove(from);
    sequence.insert(to, element);
    Ok(sequence)
}
