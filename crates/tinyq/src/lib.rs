//! # tinyq - Single-Representation Tensors with Int8 Quantization
//!
//! tinyq compresses flat `f32` weight buffers to 8-bit affine quantized
//! storage for embedded and low-resource inference.
//!
//! ## Core Features
//!
//! - **Buffers**: flat containers holding either `f32` or `i8` storage, never both
//! - **Calibration**: min/max range scan
//! - **Quantization**: in-place affine `f32 -> i8` conversion with clipping (4x smaller)
//! - **Dequantization**: on-demand recovery within `scale / 2` of the original
//!
//! # Quick Start
//!
//! ```rust
//! use tinyq::prelude::*;
//!
//! let weights = [-1.2, 0.5, 2.3, -0.8, 1.5];
//! let mut buffer = Buffer::create(&weights);
//!
//! let report = quantize_with_report(&mut buffer, &QuantConfig::default()).unwrap();
//! assert_eq!(report.wide_bytes, 20);
//! assert_eq!(report.narrow_bytes, 5);
//!
//! for (i, &w) in weights.iter().enumerate() {
//!     let recovered = dequantize(&buffer, i).unwrap();
//!     assert!((recovered - w).abs() <= buffer.scale() / 2.0 + 1e-5);
//! }
//! ```
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::float_cmp)]

// =============================================================================
// Re-exports
// =============================================================================

pub use tinyq_core as core;
pub use tinyq_quant as quant;

// =============================================================================
// Memory Accounting
// =============================================================================

pub mod memory;
pub use memory::{quantize_with_report, MemoryReport};

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for quantizing buffers.
///
/// ```rust
/// use tinyq::prelude::*;
/// ```
pub mod prelude {
    pub use tinyq_core::{Buffer, BufferError, BufferResult, QuantParams, Representation};

    pub use tinyq_quant::{
        calibrate, dequantize, dequantize_all, quantize, quantize_batch, quantize_with_config,
        CalibrationRange, QuantConfig, QuantError, QuantResult, ZeroPointRounding,
    };

    pub use crate::memory::{quantize_with_report, MemoryReport};
}
