//! Memory - Storage Footprint Accounting
//!
//! Captures the storage footprint of a buffer before and after quantization.
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use tinyq_core::{Buffer, Representation};
use tinyq_quant::{quantize_with_config, QuantConfig, QuantResult};

// =============================================================================
// Memory Report
// =============================================================================

/// Storage footprint of one buffer across a quantize call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryReport {
    /// Number of elements.
    pub len: usize,
    /// Bytes held by the wide storage before quantization.
    pub wide_bytes: usize,
    /// Bytes held by the narrow storage after quantization.
    pub narrow_bytes: usize,
}

impl MemoryReport {
    /// Ratio of wide to narrow bytes. 0.0 for an empty buffer.
    pub fn compression_ratio(&self) -> f64 {
        if self.narrow_bytes == 0 {
            return 0.0;
        }
        self.wide_bytes as f64 / self.narrow_bytes as f64
    }

    /// Percentage of the wide footprint that was released.
    pub fn savings_percent(&self) -> f64 {
        if self.wide_bytes == 0 {
            return 0.0;
        }
        (1.0 - self.narrow_bytes as f64 / self.wide_bytes as f64) * 100.0
    }

    /// Expected footprint for `len` elements, from the element widths alone.
    pub fn expected(len: usize) -> Self {
        Self {
            len,
            wide_bytes: len * Representation::WideFloat.size_of(),
            narrow_bytes: len * Representation::NarrowFixedPoint.size_of(),
        }
    }
}

/// Quantizes `buffer` and reports its storage footprint before and after.
pub fn quantize_with_report(buffer: &mut Buffer, config: &QuantConfig) -> QuantResult<MemoryReport> {
    let wide_bytes = buffer.size_bytes();
    quantize_with_config(buffer, config)?;

    Ok(MemoryReport {
        len: buffer.len(),
        wide_bytes,
        narrow_bytes: buffer.size_bytes(),
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tinyq_quant::QuantError;

    #[test]
    fn test_report_for_five_weights() {
        let mut buffer = Buffer::create(&[-1.2, 0.5, 2.3, -0.8, 1.5]);
        let report = quantize_with_report(&mut buffer, &QuantConfig::default()).unwrap();

        assert_eq!(report, MemoryReport::expected(5));
        assert_eq!(report.wide_bytes, 20);
        assert_eq!(report.narrow_bytes, 5);
        assert!((report.compression_ratio() - 4.0).abs() < f64::EPSILON);
        assert!((report.savings_percent() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_report() {
        let report = MemoryReport::expected(0);
        assert_eq!(report.compression_ratio(), 0.0);
        assert_eq!(report.savings_percent(), 0.0);
    }

    #[test]
    fn test_report_propagates_errors() {
        let mut buffer = Buffer::create(&[]);
        let err = quantize_with_report(&mut buffer, &QuantConfig::default()).unwrap_err();
        assert!(matches!(err, QuantError::EmptyCalibration));
    }
}
