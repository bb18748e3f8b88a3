//! Quantization Error Types
//!
//! Error types for calibration and quantization.
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use thiserror::Error;
use tinyq_core::BufferError;

/// Result type for quantization operations.
pub type QuantResult<T> = Result<T, QuantError>;

/// Errors that can occur during quantization.
#[derive(Error, Debug)]
pub enum QuantError {
    /// Calibration attempted on a zero-length buffer.
    #[error("Calibration error: buffer is empty")]
    EmptyCalibration,

    /// Quantize called on a buffer that is not in wide representation.
    #[error("Buffer is already quantized")]
    AlreadyQuantized,

    /// A NaN or infinite value was found during calibration.
    #[error("Non-finite value at index {index}")]
    NonFiniteValue {
        /// Index of the offending element.
        index: usize,
    },

    /// The zero point for a non-degenerate range does not fit in an `i64`.
    #[error("Numerical overflow during quantization")]
    Overflow,

    /// A buffer in a batch failed to quantize.
    #[error("Batch quantization failed at buffer {index}: {source}")]
    Batch {
        /// Position of the failing buffer in the batch.
        index: usize,
        /// The underlying failure.
        #[source]
        source: Box<QuantError>,
    },

    /// Buffer access or storage error.
    #[error(transparent)]
    Buffer(#[from] BufferError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for QuantError {
    fn from(e: toml::de::Error) -> Self {
        QuantError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for QuantError {
    fn from(e: toml::ser::Error) -> Self {
        QuantError::Config(e.to_string())
    }
}
