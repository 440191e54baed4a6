//! Error types for the collections module.

use thiserror::Error;

/// Errors reported by the fallible [`StringHashMap`](super::StringHashMap)
/// operations.
///
/// The infallible counterparts (`new`, `insert`) follow the standard library
/// and abort on allocation failure instead.
///
/// # Examples
///
/// ```rust
/// use chainmap::collections::MapError;
///
/// let error = MapError::AllocationFailure { operation: "insert" };
/// assert_eq!(format!("{error}"), "insert: memory allocation failed");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapError {
    /// Storage for the bucket array, a chain slot or a key copy could not be
    /// allocated.
    #[error("{operation}: memory allocation failed")]
    AllocationFailure {
        /// The operation that needed the allocation.
        operation: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_failure_display() {
        let error = MapError::AllocationFailure { operation: "create" };
        assert_eq!(format!("{error}"), "create: memory allocation failed");
    }

    #[test]
    fn test_error_source_is_none() {
        use std::error::Error;

        let error = MapError::AllocationFailure { operation: "insert" };
        assert!(error.source().is_none());
    }
}
