//! Storage - Owned Element Memory for Buffers
//!
//! Storage holds the elements of a buffer in exactly one representation at a
//! time. The active variant is the representation; there is no untyped view
//! over the bytes.
//!
//! # Example
//! ```rust
//! use tinyq_core::{Representation, Storage};
//!
//! let storage = Storage::try_wide_from_slice(&[1.0, 2.0, 3.0]).unwrap();
//! assert_eq!(storage.representation(), Representation::WideFloat);
//! assert_eq!(storage.size_bytes(), 12);
//! ```
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use crate::dtype::Representation;
use crate::error::{BufferError, BufferResult};

// =============================================================================
// Storage Enum
// =============================================================================

/// Element memory tagged by its representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Storage {
    /// Floating point elements.
    Wide(Vec<f32>),
    /// Quantized elements.
    Narrow(Vec<i8>),
}

impl Storage {
    /// Copies `values` into freshly allocated wide storage.
    ///
    /// Allocation failure is reported instead of aborting.
    pub fn try_wide_from_slice(values: &[f32]) -> BufferResult<Self> {
        let mut data = try_alloc::<f32>(values.len())?;
        data.extend_from_slice(values);
        Ok(Self::Wide(data))
    }

    /// Allocates empty narrow storage with room for `len` elements.
    pub fn try_narrow_with_capacity(len: usize) -> BufferResult<Vec<i8>> {
        try_alloc::<i8>(len)
    }

    /// Returns the representation of the active variant.
    #[must_use]
    pub const fn representation(&self) -> Representation {
        match self {
            Self::Wide(_) => Representation::WideFloat,
            Self::Narrow(_) => Representation::NarrowFixedPoint,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Wide(data) => data.len(),
            Self::Narrow(data) => data.len(),
        }
    }

    /// Returns true if the storage holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the size of the elements in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.len() * self.representation().size_of()
    }
}

fn try_alloc<T>(len: usize) -> BufferResult<Vec<T>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| BufferError::AllocationFailed {
            size: len.saturating_mul(core::mem::size_of::<T>()),
        })?;
    Ok(data)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_wide_from_slice() {
        let storage = Storage::try_wide_from_slice(&[1.0, -2.0]).unwrap();
        assert_eq!(storage, Storage::Wide(vec![1.0, -2.0]));
        assert_eq!(storage.len(), 2);
        assert_eq!(storage.size_bytes(), 8);
    }

    #[test]
    fn test_storage_narrow_size() {
        let storage = Storage::Narrow(vec![0, 1, -1, 127]);
        assert_eq!(storage.representation(), Representation::NarrowFixedPoint);
        assert_eq!(storage.size_bytes(), 4);
    }

    #[test]
    fn test_storage_empty() {
        let storage = Storage::try_wide_from_slice(&[]).unwrap();
        assert!(storage.is_empty());
        assert_eq!(storage.size_bytes(), 0);
    }

    #[test]
    fn test_narrow_capacity() {
        let data = Storage::try_narrow_with_capacity(16).unwrap();
        assert!(data.is_empty());
        assert!(data.capacity() >= 16);
    }

    #[test]
    fn test_allocation_failure_is_reported() {
        let err = Storage::try_narrow_with_capacity(usize::MAX).unwrap_err();
        assert!(matches!(err, BufferError::AllocationFailed { .. }));
    }
}
