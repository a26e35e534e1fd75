//! Preparation and analysis of sensor records.
//!
//! The [`Processor`] is a stateless value holding only its
//! [`ProcessorConfig`]. It exposes four operations:
//!
//! - [`Processor::prepare`]: deduplicate, impute, derive calendar features
//! - [`Processor::summarize`]: missing counts, type tags, descriptive stats
//! - [`Processor::insights`]: dashboard aggregates over cleaned records
//! - [`Processor::chart_series`]: temperature, hourly and daily energy series
//!
//! `prepare` and `summarize` accept raw or cleaned records; the two
//! aggregation operations require [`CleanedRecord`]s.

mod charts;
mod cleaning;
mod insights;
mod summary;

pub use charts::{ChartSeries, DailyEnergySeries, HourlyEnergySeries, TemperatureSeries};
pub use cleaning::{count_duplicates, remove_duplicates, PreparationSummary, Prepared};
pub use insights::Insights;
pub use summary::{DataSummary, FieldType, NumericStats};

use crate::config::ProcessorConfig;
use crate::error::{HomesenseError, Result};
use crate::record::CleanedRecord;

/// Cleaning, statistics and aggregation pipeline.
#[derive(Debug, Clone, Default)]
pub struct Processor {
    config: ProcessorConfig,
}

impl Processor {
    /// Create a processor with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with a custom configuration.
    pub fn with_config(config: ProcessorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }
}

/// Fail fast when cleaned records cannot be aggregated.
fn check_cleaned(records: &[CleanedRecord], operation: &str) -> Result<()> {
    if records.is_empty() {
        return Err(HomesenseError::precondition(format!(
            "{} requires at least one cleaned record",
            operation
        )));
    }
    if let Some(index) = records.iter().position(|r| !r.features_consistent()) {
        return Err(HomesenseError::precondition(format!(
            "{}: record {} has derived fields that do not match its timestamp",
            operation, index
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_config_validates() {
        assert!(Processor::with_config(ProcessorConfig::new().with_temperature_stride(0)).is_err());
        let processor = Processor::with_config(ProcessorConfig::new().with_temperature_stride(3))
            .unwrap();
        assert_eq!(processor.config().temperature_stride, 3);
    }

    #[test]
    fn test_check_cleaned_rejects_empty() {
        let err = check_cleaned(&[], "insights").unwrap_err();
        assert!(matches!(err, HomesenseError::PreconditionFailed(_)));
    }
}
