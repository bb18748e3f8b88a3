//! Calibration for Quantization
//!
//! Computes the real-valued range of a wide buffer, the input to the affine
//! parameter computation.
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use rayon::prelude::*;
use tinyq_core::Buffer;

use crate::config::QuantConfig;
use crate::error::{QuantError, QuantResult};

// =============================================================================
// Calibration Range
// =============================================================================

/// Minimum and maximum observed over a buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationRange {
    /// Minimum value seen.
    pub min: f32,
    /// Maximum value seen.
    pub max: f32,
}

impl CalibrationRange {
    /// Returns the dynamic range.
    pub fn dynamic_range(&self) -> f32 {
        self.max - self.min
    }

    /// Returns true when every value was identical.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

// =============================================================================
// Calibration
// =============================================================================

/// Calibrates a wide buffer with the default configuration.
///
/// # Errors
/// * `EmptyCalibration` for a zero-length buffer
/// * `NonFiniteValue` if any element is NaN or infinite
/// * `Buffer(TypeMismatch)` if the buffer is already narrow
pub fn calibrate(buffer: &Buffer) -> QuantResult<CalibrationRange> {
    calibrate_with_config(buffer, &QuantConfig::default())
}

/// Calibrates a wide buffer.
pub fn calibrate_with_config(
    buffer: &Buffer,
    config: &QuantConfig,
) -> QuantResult<CalibrationRange> {
    let data = buffer.as_wide()?;
    if data.is_empty() {
        return Err(QuantError::EmptyCalibration);
    }

    if let Some(index) = first_non_finite(data, config) {
        return Err(QuantError::NonFiniteValue { index });
    }

    let seed = CalibrationRange {
        min: data[0],
        max: data[0],
    };
    let range = if config.use_parallel(data.len()) {
        data.par_iter()
            .map(|&v| CalibrationRange { min: v, max: v })
            .reduce(|| seed, CalibrationRange::merge)
    } else {
        data.iter()
            .fold(seed, |acc, &v| acc.merge(CalibrationRange { min: v, max: v }))
    };

    Ok(range)
}

fn first_non_finite(data: &[f32], config: &QuantConfig) -> Option<usize> {
    if config.use_parallel(data.len()) {
        data.par_iter().position_first(|v| !v.is_finite())
    } else {
        data.iter().position(|v| !v.is_finite())
    }
}

// =============================================================================
// Tests
// =============================================================================
