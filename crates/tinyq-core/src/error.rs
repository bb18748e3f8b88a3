//! Error Types - tinyq Buffer Error Handling
//!
//! Errors raised by buffer construction, element access and storage
//! replacement.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use thiserror::Error;

use crate::dtype::Representation;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when accessing or mutating a buffer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BufferError {
    /// A representation-specific operation ran against the other representation.
    #[error("Type mismatch: expected {expected}, buffer holds {actual}")]
    TypeMismatch {
        /// The representation the operation requires.
        expected: Representation,
        /// The representation the buffer holds.
        actual: Representation,
    },

    /// Index outside `[0, len)`.
    #[error("Index out of range: index {index} for buffer of length {len}")]
    IndexOutOfRange {
        /// The invalid index.
        index: usize,
        /// The buffer length.
        len: usize,
    },

    /// Replacement storage does not match the buffer length.
    #[error("Length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// The buffer length.
        expected: usize,
        /// The length of the supplied storage.
        actual: usize,
    },

    /// Quantization scale was zero, negative or not finite.
    #[error("Invalid scale: {0} (must be finite and > 0)")]
    InvalidScale(f32),

    /// Storage allocation failed.
    #[error("Memory allocation failed: requested {size} bytes")]
    AllocationFailed {
        /// The requested size in bytes.
        size: usize,
    },
}

// =============================================================================
// Result Type
// =============================================================================

/// A specialized Result type for buffer operations.
pub type BufferResult<T> = core::result::Result<T, BufferError>;

// =============================================================================
// Helper Functions
// =============================================================================

impl BufferError {
    /// Creates a new type mismatch error.
    #[must_use]
    pub const fn type_mismatch(expected: Representation, actual: Representation) -> Self {
        Self::TypeMismatch { expected, actual }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BufferError::type_mismatch(
            Representation::WideFloat,
            Representation::NarrowFixedPoint,
        );
        assert!(err.to_string().contains("Type mismatch"));

        let err = BufferError::IndexOutOfRange { index: 7, len: 5 };
        assert_eq!(
            err.to_string(),
            "Index out of range: index 7 for buffer of length 5"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            BufferError::AllocationFailed { size: 4 },
            BufferError::AllocationFailed { size: 4 }
        );
        assert_ne!(BufferError::InvalidScale(0.0), BufferError::InvalidScale(-1.0));
    }
}
