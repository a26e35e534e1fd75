//! Processor configuration.

use crate::error::{HomesenseError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the preparation and aggregation stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessorConfig {
    /// Percentile (0, 1] of energy usage above which a record is a peak hour.
    pub peak_percentile: f64,

    /// Every Nth cleaned record goes into the temperature chart series.
    pub temperature_stride: usize,

    /// Decimal places for rounded insight values.
    pub decimals: u32,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            peak_percentile: 0.75,
            temperature_stride: 10,
            decimals: 2,
        }
    }
}

impl ProcessorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the peak-hour percentile.
    pub fn with_peak_percentile(mut self, p: f64) -> Self {
        self.peak_percentile = p;
        self
    }

    /// Set the temperature chart stride.
    pub fn with_temperature_stride(mut self, stride: usize) -> Self {
        self.temperature_stride = stride;
        self
    }

    /// Set the rounding precision of insights.
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Check that every setting is usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.peak_percentile > 0.0 && self.peak_percentile <= 1.0) {
            return Err(HomesenseError::invalid_argument(format!(
                "peak_percentile must be in (0, 1], got {}",
                self.peak_percentile
            )));
        }
        if self.temperature_stride == 0 {
            return Err(HomesenseError::invalid_argument(
                "temperature_stride must be at least 1",
            ));
        }
        if self.decimals > 10 {
            return Err(HomesenseError::invalid_argument(format!(
                "decimals must be at most 10, got {}",
                self.decimals
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProcessorConfig::default();
        assert!((config.peak_percentile - 0.75).abs() < 1e-12);
        assert_eq!(config.temperature_stride, 10);
        assert_eq!(config.decimals, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(ProcessorConfig::new().with_peak_percentile(0.0).validate().is_err());
        assert!(ProcessorConfig::new().with_peak_percentile(1.5).validate().is_err());
        assert!(ProcessorConfig::new().with_peak_percentile(f64::NAN).validate().is_err());
        assert!(ProcessorConfig::new().with_temperature_stride(0).validate().is_err());
        assert!(ProcessorConfig::new().with_decimals(11).validate().is_err());
        assert!(ProcessorConfig::new().with_peak_percentile(1.0).validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ProcessorConfig = serde_json::from_str(r#"{"temperatureStride": 5}"#).unwrap();
        assert_eq!(config.temperature_stride, 5);
        assert_eq!(config.decimals, 2);
    }
}
