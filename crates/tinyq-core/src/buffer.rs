//! Buffer - Flat Numeric Container
//!
//! A `Buffer` owns a flat sequence of numbers in one representation at a time,
//! together with the affine parameters needed to interpret narrow values.
//! Buffers start out wide and can be switched to narrow storage exactly once.
//!
//! A buffer carries no internal locking. It may be moved between threads, but
//! sharing one instance across threads needs external synchronization.
//!
//! # Example
//! ```rust
//! use tinyq_core::{Buffer, Representation};
//!
//! let buffer = Buffer::create(&[0.5, -1.0]);
//! assert_eq!(buffer.len(), 2);
//! assert_eq!(buffer.representation(), Representation::WideFloat);
//! assert_eq!(buffer.read_wide(1).unwrap(), -1.0);
//! ```
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use serde::{Deserialize, Serialize};

use crate::dtype::Representation;
use crate::error::{BufferError, BufferResult};
use crate::storage::Storage;

// =============================================================================
// Quantization Parameters
// =============================================================================

/// Affine mapping parameters for narrow values.
///
/// `real = (narrow - zero_point) * scale`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantParams {
    /// Real step represented by one narrow unit.
    pub scale: f32,
    /// Narrow value that represents real zero.
    ///
    /// Wider than the narrow domain: a range that is tiny next to its offset
    /// from zero puts real zero far outside `[-128, 127]`.
    pub zero_point: i64,
}

impl QuantParams {
    /// Creates new parameters.
    #[must_use]
    pub const fn new(scale: f32, zero_point: i64) -> Self {
        Self { scale, zero_point }
    }

    /// Parameters of a wide buffer: scale 1.0, zero point 0.
    #[must_use]
    pub const fn identity() -> Self {
        Self::new(1.0, 0)
    }

    /// Returns true when the scale is finite and positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.scale.is_finite() && self.scale > 0.0
    }

    /// Maps a narrow value back to its approximate real value.
    #[must_use]
    pub fn to_real(&self, narrow: i8) -> f32 {
        ((f64::from(narrow) - self.zero_point as f64) * f64::from(self.scale)) as f32
    }
}

impl Default for QuantParams {
    fn default() -> Self {
        Self::identity()
    }
}

// =============================================================================
// Buffer Struct
// =============================================================================

/// Flat numeric buffer holding either wide or narrow storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    storage: Storage,
    params: QuantParams,
}

impl Buffer {
    /// Creates a wide buffer holding a copy of `values`.
    ///
    /// Allocation failure aborts the process; use [`Buffer::try_create`] to
    /// observe it instead.
    #[must_use]
    pub fn create(values: &[f32]) -> Self {
        Self {
            storage: Storage::Wide(values.to_vec()),
            params: QuantParams::identity(),
        }
    }

    /// Creates a wide buffer holding a copy of `values`, reporting allocation
    /// failure as [`BufferError::AllocationFailed`].
    pub fn try_create(values: &[f32]) -> BufferResult<Self> {
        Ok(Self {
            storage: Storage::try_wide_from_slice(values)?,
            params: QuantParams::identity(),
        })
    }

    // -------------------------------------------------------------------------
    // Introspection
    // -------------------------------------------------------------------------

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the buffer holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the active representation.
    #[must_use]
    pub const fn representation(&self) -> Representation {
        self.storage.representation()
    }

    /// Returns the quantization scale (1.0 while wide).
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.params.scale
    }

    /// Returns the quantization zero point (0 while wide).
    #[must_use]
    pub const fn zero_point(&self) -> i64 {
        self.params.zero_point
    }

    /// Returns the affine parameters.
    #[must_use]
    pub const fn params(&self) -> QuantParams {
        self.params
    }

    /// Returns the size of the element storage in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.storage.size_bytes()
    }

    /// Returns the underlying storage.
    #[must_use]
    pub const fn storage(&self) -> &Storage {
        &self.storage
    }

    // -------------------------------------------------------------------------
    // Element Access
    // -------------------------------------------------------------------------

    /// Returns the wide elements.
    pub fn as_wide(&self) -> BufferResult<&[f32]> {
        match &self.storage {
            Storage::Wide(data) => Ok(data),
            Storage::Narrow(_) => Err(self.mismatch(Representation::WideFloat)),
        }
    }

    /// Returns the narrow elements.
    pub fn as_narrow(&self) -> BufferResult<&[i8]> {
        match &self.storage {
            Storage::Narrow(data) => Ok(data),
            Storage::Wide(_) => Err(self.mismatch(Representation::NarrowFixedPoint)),
        }
    }

    /// Reads one wide element.
    pub fn read_wide(&self, index: usize) -> BufferResult<f32> {
        let data = self.as_wide()?;
        data.get(index)
            .copied()
            .ok_or(BufferError::IndexOutOfRange {
                index,
                len: data.len(),
            })
    }

    /// Reads one narrow element.
    pub fn read_narrow(&self, index: usize) -> BufferResult<i8> {
        let data = self.as_narrow()?;
        data.get(index)
            .copied()
            .ok_or(BufferError::IndexOutOfRange {
                index,
                len: data.len(),
            })
    }

    // -------------------------------------------------------------------------
    // Storage Replacement
    // -------------------------------------------------------------------------

    /// Replaces wide storage with `data` and records `params`.
    ///
    /// The wide storage is dropped. On error the buffer is left untouched.
    pub fn install_narrow(&mut self, data: Vec<i8>, params: QuantParams) -> BufferResult<()> {
        if !self.representation().is_wide() {
            return Err(self.mismatch(Representation::WideFloat));
        }
        if data.len() != self.len() {
            return Err(BufferError::LengthMismatch {
                expected: self.len(),
                actual: data.len(),
            });
        }
        if !params.is_valid() {
            return Err(BufferError::InvalidScale(params.scale));
        }

        self.storage = Storage::Narrow(data);
        self.params = params;
        Ok(())
    }

    fn mismatch(&self, expected: Representation) -> BufferError {
        BufferError::type_mismatch(expected, self.representation())
    }
}

// =============================================================================
// Tests
// =============================================================================
