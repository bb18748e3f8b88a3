//! Representation - Buffer Element Types
//!
//! Defines the two numeric representations a tinyq buffer can hold and the
//! bounds of the narrow fixed-point domain.
//!
//! # Key Features
//! - Runtime representation tag via `Representation`
//! - Element widths for memory accounting
//! - Narrow-domain constants shared by the buffer and the quantizer
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use serde::{Deserialize, Serialize};

// =============================================================================
// Narrow Domain
// =============================================================================

/// Smallest representable narrow value.
pub const NARROW_MIN: i32 = i8::MIN as i32;

/// Largest representable narrow value.
pub const NARROW_MAX: i32 = i8::MAX as i32;

/// Number of quantization steps between `NARROW_MIN` and `NARROW_MAX`.
pub const NARROW_STEPS: i32 = NARROW_MAX - NARROW_MIN;

/// Integer midpoint of the narrow domain (`NARROW_MIN + 128`).
pub const NARROW_MID: i32 = NARROW_MIN + (NARROW_STEPS + 1) / 2;

// =============================================================================
// Representation Enum
// =============================================================================

/// Runtime tag for the numeric representation a buffer currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// 32-bit floating point values.
    WideFloat,
    /// 8-bit signed fixed-point values with an affine scale/zero point.
    NarrowFixedPoint,
}

impl Representation {
    /// Returns the size in bytes of one element.
    #[must_use]
    pub const fn size_of(self) -> usize {
        match self {
            Self::WideFloat => core::mem::size_of::<f32>(),
            Self::NarrowFixedPoint => core::mem::size_of::<i8>(),
        }
    }

    /// Returns the number of bits per element.
    #[must_use]
    pub const fn bits(self) -> usize {
        self.size_of() * 8
    }

    /// Returns true for the floating point representation.
    #[must_use]
    pub const fn is_wide(self) -> bool {
        matches!(self, Self::WideFloat)
    }

    /// Returns true for the quantized representation.
    #[must_use]
    pub const fn is_narrow(self) -> bool {
        matches!(self, Self::NarrowFixedPoint)
    }

    /// Ratio of this representation's element width to `other`'s.
    ///
    /// `WideFloat.compression_ratio_to(NarrowFixedPoint)` is `4.0`.
    pub fn compression_ratio_to(self, other: Self) -> f32 {
        self.size_of() as f32 / other.size_of() as f32
    }

    /// Returns the name of this representation as a string.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WideFloat => "f32",
            Self::NarrowFixedPoint => "i8 (quantized)",
        }
    }
}

impl Default for Representation {
    fn default() -> Self {
        Self::WideFloat
    }
}

impl core::fmt::Display for Representation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_domain() {
        assert_eq!(NARROW_MIN, -128);
        assert_eq!(NARROW_MAX, 127);
        assert_eq!(NARROW_STEPS, 255);
        assert_eq!(NARROW_MID, 0);
    }

    #[test]
    fn test_representation_size() {
        assert_eq!(Representation::WideFloat.size_of(), 4);
        assert_eq!(Representation::NarrowFixedPoint.size_of(), 1);
        assert_eq!(Representation::WideFloat.bits(), 32);
        assert_eq!(Representation::NarrowFixedPoint.bits(), 8);
    }

    #[test]
    fn test_compression_ratio() {
        let ratio =
            Representation::WideFloat.compression_ratio_to(Representation::NarrowFixedPoint);
        assert_eq!(ratio, 4.0);
    }

    #[test]
    fn test_representation_serde_names() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            repr: Representation,
        }

        let toml_str = toml::to_string(&Wrapper {
            repr: Representation::NarrowFixedPoint,
        })
        .unwrap();
        assert!(toml_str.contains("narrow_fixed_point"));

        let parsed: Wrapper = toml::from_str("repr = \"wide_float\"").unwrap();
        assert_eq!(parsed.repr, Representation::WideFloat);
    }

    #[test]
    fn test_display() {
        assert_eq!(Representation::WideFloat.to_string(), "f32");
        assert_eq!(Representation::default(), Representation::WideFloat);
    }
}
