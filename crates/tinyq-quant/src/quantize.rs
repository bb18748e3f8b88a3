//! Quantization Functions
//!
//! Converts wide buffers to 8-bit affine quantized storage in place.
//!
//! The forward mapping is `q = round(clamp(v / scale + zero_point, -128, 127))`
//! with `scale = (max - min) / 255` and
//! `zero_point = round(-min / scale) - 128`.
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use rayon::prelude::*;
use tracing::{debug, info};

use tinyq_core::{
    Buffer, BufferError, QuantParams, Representation, Storage, NARROW_MAX, NARROW_MID, NARROW_MIN,
    NARROW_STEPS,
};

use crate::calibration::{calibrate_with_config, CalibrationRange};
use crate::config::QuantConfig;
use crate::dequantize::dequantize_all;
use crate::error::{QuantError, QuantResult};

// =============================================================================
// Public API
// =============================================================================

/// Quantizes a wide buffer in place with the default configuration.
///
/// # Arguments
/// * `buffer` - The buffer to quantize; must be in wide representation
///
/// # Errors
/// * `AlreadyQuantized` if the buffer is narrow (the buffer is left untouched)
/// * `EmptyCalibration` for a zero-length buffer
///
/// # Example
/// ```rust
/// use tinyq_core::{Buffer, Representation};
/// use tinyq_quant::quantize;
///
/// let mut buffer = Buffer::create(&[-1.0, 0.0, 1.0]);
/// quantize(&mut buffer).unwrap();
/// assert_eq!(buffer.representation(), Representation::NarrowFixedPoint);
/// ```
pub fn quantize(buffer: &mut Buffer) -> QuantResult<()> {
    quantize_with_config(buffer, &QuantConfig::default())
}

/// Quantizes a wide buffer in place.
pub fn quantize_with_config(buffer: &mut Buffer, config: &QuantConfig) -> QuantResult<()> {
    if !buffer.representation().is_wide() {
        return Err(QuantError::AlreadyQuantized);
    }

    let range = calibrate_with_config(buffer, config)?;
    let params = compute_params(range, config)?;
    debug!(
        min = range.min,
        max = range.max,
        scale = params.scale,
        zero_point = params.zero_point,
        "calibrated buffer"
    );

    let wide_bytes = buffer.size_bytes();
    let narrow = convert(buffer.as_wide()?, params, config)?;
    buffer.install_narrow(narrow, params)?;

    info!(
        len = buffer.len(),
        wide_bytes,
        narrow_bytes = buffer.size_bytes(),
        "quantized buffer (32-bit -> 8-bit)"
    );
    Ok(())
}

/// Quantizes several independent buffers in parallel.
///
/// Stops at the first failure, reported as `QuantError::Batch` with the index
/// of the failing buffer. Buffers processed before the failure stay quantized.
pub fn quantize_batch(buffers: &mut [Buffer], config: &QuantConfig) -> QuantResult<()> {
    buffers
        .par_iter_mut()
        .enumerate()
        .try_for_each(|(index, buffer)| {
            quantize_with_config(buffer, config).map_err(|e| QuantError::Batch {
                index,
                source: Box::new(e),
            })
        })
}

/// Computes the affine parameters for a calibrated range.
///
/// A degenerate range (every value equal) uses a scale of 1.0 and a zero
/// point that maps the narrow midpoint back to `min`. A constant too large
/// for that zero point is stored with `scale = |min|` instead, so the midpoint
/// still recovers it exactly.
pub fn compute_params(range: CalibrationRange, config: &QuantConfig) -> QuantResult<QuantParams> {
    let min = f64::from(range.min);
    let max = f64::from(range.max);
    let scale = ((max - min) / f64::from(NARROW_STEPS)) as f32;

    // scale can underflow to 0 for ranges narrower than f32 precision
    if range.is_degenerate() || scale <= 0.0 {
        let shifted = config
            .zero_point_rounding
            .apply(f64::from(NARROW_MID) - min);
        return Ok(match to_zero_point(shifted) {
            Some(zero_point) => QuantParams::new(1.0, zero_point),
            None => QuantParams::new(
                range.min.abs(),
                i64::from(NARROW_MID) - min.signum() as i64,
            ),
        });
    }

    // |min / scale| stays below 255 * 2^24 for any finite f32 range
    let zero_point = to_zero_point(
        config.zero_point_rounding.apply(-min / f64::from(scale)) + f64::from(NARROW_MIN),
    )
    .ok_or(QuantError::Overflow)?;
    Ok(QuantParams::new(scale, zero_point))
}

/// Maps one real value into the narrow domain, clipping out-of-range values.
pub fn quantize_value(value: f32, params: QuantParams) -> i8 {
    let scaled = f64::from(value) / f64::from(params.scale) + params.zero_point as f64;
    scaled
        .clamp(f64::from(NARROW_MIN), f64::from(NARROW_MAX))
        .round() as i8
}

// =============================================================================
// Conversion
// =============================================================================

fn convert(data: &[f32], params: QuantParams, config: &QuantConfig) -> QuantResult<Vec<i8>> {
    let mut narrow = Storage::try_narrow_with_capacity(data.len())?;
    if config.use_parallel(data.len()) {
        data.par_iter()
            .map(|&v| quantize_value(v, params))
            .collect_into_vec(&mut narrow);
    } else {
        narrow.extend(data.iter().map(|&v| quantize_value(v, params)));
    }
    Ok(narrow)
}

fn to_zero_point(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    (value >= -LIMIT && value < LIMIT).then(|| value as i64)
}

// =============================================================================
// Utility Functions
// =============================================================================

/// Root mean square error between `original` and `recovered`.
///
/// Accumulates in `f64`. Slices of different length, or empty slices, have
/// no meaningful error and yield `f32::INFINITY`.
pub fn compute_quantization_error(original: &[f32], recovered: &[f32]) -> f32 {
    if original.is_empty() || original.len() != recovered.len() {
        return f32::INFINITY;
    }

    let sum_sq: f64 = original
        .iter()
        .zip(recovered)
        .map(|(&a, &b)| (f64::from(a) - f64::from(b)).powi(2))
        .sum();
    (sum_sq / original.len() as f64).sqrt() as f32
}

/// Statistics about the error introduced by quantizing a buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantizationStats {
    /// Root mean square error.
    pub rmse: f32,
    /// Maximum absolute error.
    pub max_error: f32,
    /// Mean absolute error.
    pub mean_error: f32,
    /// Storage compression ratio.
    pub compression_ratio: f32,
    /// Rounding error bound for in-range values (`scale / 2`).
    pub error_bound: f32,
}

/// Computes detailed quantization statistics for a quantized buffer against
/// the values it was created from.
pub fn compute_quantization_stats(
    original: &[f32],
    buffer: &Buffer,
) -> QuantResult<QuantizationStats> {
    if original.len() != buffer.len() {
        return Err(BufferError::LengthMismatch {
            expected: buffer.len(),
            actual: original.len(),
        }
        .into());
    }
    if original.is_empty() {
        return Err(QuantError::EmptyCalibration);
    }

    let dequantized = dequantize_all(buffer)?;
    let errors: Vec<f32> = original
        .iter()
        .zip(dequantized.iter())
        .map(|(a, b)| (a - b).abs())
        .collect();

    let max_error = errors.iter().fold(0.0f32, |a, &b| a.max(b));
    let mean_error = errors.iter().sum::<f32>() / errors.len() as f32;

    Ok(QuantizationStats {
        rmse: compute_quantization_error(original, &dequantized),
        max_error,
        mean_error,
        compression_ratio: Representation::WideFloat
            .compression_ratio_to(buffer.representation()),
        error_bound: buffer.scale() / 2.0,
    })
}

// =============================================================================
// Tests
// =============================================================================
