//! Quantization Configuration
//!
//! Tunables for the quantization engine, loadable from TOML.
//!
//! ```toml
//! zero_point_rounding = "nearest"
//! parallel_threshold = 65536
//! ```
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{QuantError, QuantResult};

// =============================================================================
// Zero Point Rounding
// =============================================================================

/// How `-min / scale` is turned into an integer zero point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZeroPointRounding {
    /// Round half away from zero.
    #[default]
    Nearest,
    /// Truncate toward zero (bit parity with C-style `(int)` casts).
    Truncate,
}

impl ZeroPointRounding {
    /// Applies the rounding mode.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            ZeroPointRounding::Nearest => value.round(),
            ZeroPointRounding::Truncate => value.trunc(),
        }
    }
}

// =============================================================================
// Quant Configuration
// =============================================================================

/// Quantization engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantConfig {
    /// Zero point rounding mode.
    #[serde(default)]
    pub zero_point_rounding: ZeroPointRounding,

    /// Buffers with at least this many elements are scanned and converted
    /// with rayon.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_parallel_threshold() -> usize {
    1 << 16
}

impl Default for QuantConfig {
    fn default() -> Self {
        Self {
            zero_point_rounding: ZeroPointRounding::default(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl QuantConfig {
    /// Returns true if a buffer of `len` elements should be processed in parallel.
    pub fn use_parallel(&self, len: usize) -> bool {
        len >= self.parallel_threshold
    }

    /// Checks the configuration for invalid values.
    pub fn validate(&self) -> QuantResult<()> {
        if self.parallel_threshold == 0 {
            return Err(QuantError::Config(
                "parallel_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> QuantResult<Self> {
        let config: QuantConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> QuantResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> QuantResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
