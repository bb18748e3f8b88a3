//! Dequantization Functions
//!
//! Recovers approximate real values from a quantized buffer without changing
//! its stored representation.
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use rayon::prelude::*;
use tinyq_core::{Buffer, BufferResult};

// =============================================================================
// Public API
// =============================================================================

/// Dequantizes a single element of a narrow buffer.
///
/// Computes `(q - zero_point) * scale`.
///
/// # Errors
/// * `TypeMismatch` if the buffer is still wide
/// * `IndexOutOfRange` if `index >= buffer.len()`
///
/// # Example
/// ```rust
/// use tinyq_core::Buffer;
/// use tinyq_quant::{dequantize, quantize};
///
/// let mut buffer = Buffer::create(&[5.0, 5.0, 5.0]);
/// quantize(&mut buffer).unwrap();
/// assert_eq!(dequantize(&buffer, 1).unwrap(), 5.0);
/// ```
pub fn dequantize(buffer: &Buffer, index: usize) -> BufferResult<f32> {
    let q = buffer.read_narrow(index)?;
    Ok(buffer.params().to_real(q))
}

/// Dequantizes every element of a narrow buffer.
pub fn dequantize_all(buffer: &Buffer) -> BufferResult<Vec<f32>> {
    let params = buffer.params();
    Ok(buffer.as_narrow()?.iter().map(|&q| params.to_real(q)).collect())
}

/// Dequantizes every element of a narrow buffer using rayon.
pub fn dequantize_all_parallel(buffer: &Buffer) -> BufferResult<Vec<f32>> {
    let params = buffer.params();
    Ok(buffer
        .as_narrow()?
        .par_iter()
        .map(|&q| params.to_real(q))
        .collect())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantize::quantize;
    use tinyq_core::{BufferError, Representation};

    #[test]
    fn test_dequantize_wide_buffer() {
        let buffer = Buffer::create(&[1.0, 2.0]);
        assert_eq!(
            dequantize(&buffer, 0),
            Err(BufferError::TypeMismatch {
                expected: Representation::NarrowFixedPoint,
                actual: Representation::WideFloat,
            })
        );
        assert!(dequantize_all(&buffer).is_err());
    }

    #[test]
    fn test_dequantize_out_of_range() {
        let mut buffer = Buffer::create(&[1.0, 2.0]);
        quantize(&mut buffer).unwrap();
        assert_eq!(
            dequantize(&buffer, 2),
            Err(BufferError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_roundtrip_within_half_scale() {
        let original: Vec<f32> = (0..64).map(|x| x as f32 / 10.0 - 2.0).collect();
        let mut buffer = Buffer::create(&original);
        quantize(&mut buffer).unwrap();

        let bound = buffer.scale() / 2.0 + 1e-5;
        for (i, &orig) in original.iter().enumerate() {
            let deq = dequantize(&buffer, i).unwrap();
            assert!(
                (orig - deq).abs() <= bound,
                "error too large at {}: {} vs {}",
                i,
                orig,
                deq
            );
        }
    }

    #[test]
    fn test_dequantize_does_not_mutate() {
        let mut buffer = Buffer::create(&[-3.0, 0.0, 3.0]);
        quantize(&mut buffer).unwrap();
        let snapshot = buffer.clone();

        let _ = dequantize_all(&buffer).unwrap();
        let _ = dequantize(&buffer, 1).unwrap();

        assert_eq!(buffer, snapshot);
        assert_eq!(buffer.representation(), Representation::NarrowFixedPoint);
    }

    #[test]
    fn test_dequantize_all_matches_elementwise() {
        let original: Vec<f32> = (0..100).map(|x| (x as f32).cos()).collect();
        let mut buffer = Buffer::create(&original);
        quantize(&mut buffer).unwrap();

        let all = dequantize_all(&buffer).unwrap();
        let parallel = dequantize_all_parallel(&buffer).unwrap();
        assert_eq!(all, parallel);
        for (i, &value) in all.iter().enumerate() {
            assert_eq!(value, dequantize(&buffer, i).unwrap());
        }
    }
}
