// Homesense Report - Configuration
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Report configuration and errors.

use homesense::{HomesenseError, ProcessorConfig};
use homesense_testdata::GeneratorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors surfaced by the report binary.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Pipeline(#[from] HomesenseError),
}

/// Settings for both pipeline stages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub generator: GeneratorConfig,
    pub processor: ProcessorConfig,
}

impl ReportConfig {
    /// Load from a JSON file; missing keys take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"generator": {{"seed": 7}}, "processor": {{"temperatureStride": 4}}}}"#
        )
        .unwrap();

        let config = ReportConfig::from_file(file.path()).unwrap();
        assert_eq!(config.generator.seed, 7);
        assert!((config.generator.duplicate_fraction - 0.02).abs() < 1e-12);
        assert_eq!(config.processor.temperature_stride, 4);
        assert_eq!(config.processor.decimals, 2);
    }

    #[test]
    fn test_missing_file() {
        let err = ReportConfig::from_file("/nonexistent/homesense.json").unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
