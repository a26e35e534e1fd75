//! # Homesense - Smart home sensor data preparation
//!
//! Cleaning and analysis pipeline for hourly smart home sensor records
//! (temperature, humidity, energy usage, motion, appliance state).
//!
//! ## Key Features
//!
//! - **Deduplication**: exact row duplicates dropped, first occurrence kept
//! - **Median imputation**: missing numeric readings filled per field
//! - **Calendar features**: hour, weekday and peak-hour flag per record
//! - **Statistics**: missing counts, type tags, nearest-rank percentiles
//! - **Dashboard aggregates**: insights and chart series
//!
//! ## Quick Start
//!
//! ```rust
//! use homesense::{ApplianceStatus, Processor, RawRecord};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//! let record = RawRecord::new(ts, Some(20.0), Some(60.0), Some(1.5), 0, ApplianceStatus::Off);
//!
//! let processor = Processor::new();
//! let prepared = processor.prepare(&[record.clone(), record]);
//! assert_eq!(prepared.summary.duplicates_removed, 1);
//!
//! let insights = processor.insights(&prepared.cleaned).unwrap();
//! assert_eq!(insights.peak_hour, Some(0));
//! ```
//!
//! Synthetic input comes from the `homesense-testdata` crate.
//!
//! ## Modules
//!
//! - [`record`]: Raw and cleaned record types
//! - [`processor`]: Preparation, summary, insights and chart series
//! - [`stats`]: Mean, standard deviation, median, percentiles, rounding
//! - [`config`]: Processor configuration
//! - [`error`]: Error type

pub mod config;
pub mod error;
pub mod processor;
pub mod record;
pub mod stats;

// Re-exports for convenient access
pub use config::ProcessorConfig;
pub use error::{HomesenseError, Result};
pub use processor::{
    ChartSeries, DailyEnergySeries, DataSummary, FieldType, HourlyEnergySeries, Insights,
    NumericStats, PreparationSummary, Prepared, Processor, TemperatureSeries,
};
pub use record::{ApplianceStatus, CleanedRecord, RawRecord, SensorField, DAY_NAMES};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
