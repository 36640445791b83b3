//! Error types for dynamic array operations.

use std::error::Error;
use std::fmt;

/// Errors returned by fallible [`DynamicArray`](crate::DynamicArray) operations.
///
/// Every variant is recoverable: the array is left unchanged when an
/// operation fails, so callers can report the error and continue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The supplied index violates the valid range of the operation.
    ///
    /// Raised by `at`, `insert` and `erase`. For `insert` the valid range
    /// is `0..=len`; for the others it is `0..len`.
    OutOfBounds {
        /// The rejected index.
        index: usize,
        /// Logical length of the array at the time of the call.
        len: usize,
    },
    /// The operation requires at least one element.
    ///
    /// Raised by `front`, `back` and `pop_back`.
    EmptyContainer,
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::EmptyContainer => write!(f, "dynamic array is empty"),
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_names_index_and_len() {
        let err = ArrayError::OutOfBounds { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of bounds for length 3");
    }

    #[test]
    fn empty_container_message() {
        assert_eq!(ArrayError::EmptyContainer.to_string(), "dynamic array is empty");
    }

    #[test]
    fn usable_as_boxed_error() {
        let boxed: Box<dyn Error> = Box::new(ArrayError::EmptyContainer);
        assert!(boxed.source().is_none());
    }
}
