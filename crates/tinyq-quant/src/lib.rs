//! tinyq Quant - Affine Int8 Quantization Engine
//!
//! Converts `tinyq_core::Buffer`s from 32-bit floats to 8-bit affine quantized
//! storage in place, and recovers approximate real values on demand.
//!
//! - **calibrate**: min/max scan of a wide buffer
//! - **quantize**: `q = round(clamp(v / scale + zero_point, -128, 127))`
//! - **dequantize**: `v ≈ (q - zero_point) * scale`
//!
//! # Example
//! ```rust
//! use tinyq_core::Buffer;
//! use tinyq_quant::{dequantize, quantize};
//!
//! let mut buffer = Buffer::create(&[-1.2, 0.5, 2.3, -0.8, 1.5]);
//! quantize(&mut buffer).unwrap();
//! assert_eq!(buffer.zero_point(), -41);
//! let recovered = dequantize(&buffer, 1).unwrap();
//! assert!((recovered - 0.5).abs() <= buffer.scale() / 2.0 + 1e-5);
//! ```
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod calibration;
pub mod config;
pub mod dequantize;
pub mod error;
pub mod quantize;

pub use calibration::{calibrate, calibrate_with_config, CalibrationRange};
pub use config::{QuantConfig, ZeroPointRounding};
pub use dequantize::{dequantize, dequantize_all, dequantize_all_parallel};
pub use error::{QuantError, QuantResult};
pub use quantize::{
    compute_params, compute_quantization_error, compute_quantization_stats, quantize,
    quantize_batch, quantize_value, quantize_with_config, QuantizationStats,
};

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tinyq_core::{Buffer, Representation};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn quantized_values_stay_in_range(
            values in prop::collection::vec(-1000.0f32..1000.0, 1..128)
        ) {
            let mut buffer = Buffer::create(&values);
            quantize(&mut buffer).unwrap();

            prop_assert_eq!(buffer.representation(), Representation::NarrowFixedPoint);
            prop_assert_eq!(buffer.len(), values.len());
            prop_assert!(buffer.scale() > 0.0);
            for i in 0..buffer.len() {
                let q = i32::from(buffer.read_narrow(i).unwrap());
                prop_assert!((-128..=127).contains(&q));
            }
        }

        #[test]
        fn roundtrip_error_is_bounded(
            values in prop::collection::vec(-1000.0f32..1000.0, 1..128)
        ) {
            let mut buffer = Buffer::create(&values);
            quantize(&mut buffer).unwrap();

            let scale = buffer.scale();
            for (i, &v) in values.iter().enumerate() {
                let recovered = dequantize(&buffer, i).unwrap();
                let tolerance = scale / 2.0 * (1.0 + 1e-4) + 1e-5 * (1.0 + v.abs());
                prop_assert!(
                    (recovered - v).abs() <= tolerance,
                    "value {} recovered as {} (scale {})", v, recovered, scale
                );
            }
        }

        #[test]
        fn constant_buffers_recover_their_value(
            value in -10_000.0f32..10_000.0,
            len in 1usize..32
        ) {
            let values = vec![value; len];
            let mut buffer = Buffer::create(&values);
            quantize(&mut buffer).unwrap();

            prop_assert_eq!(buffer.scale(), 1.0);
            for i in 0..len {
                prop_assert!((dequantize(&buffer, i).unwrap() - value).abs() <= 0.5 + 1e-3);
            }
        }
    }
}
