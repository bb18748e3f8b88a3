//! tinyq Core - Numeric Buffer Layer
//!
//! This crate provides the data model underneath the tinyq quantization
//! engine: a flat buffer that holds either 32-bit floats or 8-bit quantized
//! values, never both, plus the affine parameters needed to read the latter.
//!
//! # Key Features
//! - Tagged storage (`Storage::Wide` / `Storage::Narrow`)
//! - Type-checked, bounds-checked element access
//! - Single-owner storage replacement for quantization
//!
//! # Example
//! ```rust
//! use tinyq_core::{Buffer, BufferError};
//!
//! let buffer = Buffer::create(&[1.0, 2.0]);
//! assert!(matches!(buffer.read_narrow(0), Err(BufferError::TypeMismatch { .. })));
//! ```
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::float_cmp)]

// =============================================================================
// Modules
// =============================================================================

pub mod buffer;
pub mod dtype;
pub mod error;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use buffer::{Buffer, QuantParams};
pub use dtype::{Representation, NARROW_MAX, NARROW_MID, NARROW_MIN, NARROW_STEPS};
pub use error::{BufferError, BufferResult};
pub use storage::Storage;

// =============================================================================
// Prelude
// =============================================================================

/// Convenient imports for common usage.
pub mod prelude {
    pub use crate::buffer::{Buffer, QuantParams};
    pub use crate::dtype::Representation;
    pub use crate::error::{BufferError, BufferResult};
}
