//! Statistics stage: missing-value counts, type tags, descriptive stats.

use super::cleaning::count_duplicates;
use super::Processor;
use crate::record::{RawRecord, SensorField};
use crate::stats;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Observed type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    DateTime,
    Float,
    Integer,
    Category,
    /// No value observed in the input.
    Null,
}

impl FieldType {
    fn of(field: SensorField) -> Self {
        match field {
            SensorField::Timestamp => FieldType::DateTime,
            SensorField::Temperature | SensorField::Humidity | SensorField::EnergyUsage => {
                FieldType::Float
            }
            SensorField::MotionDetected => FieldType::Integer,
            SensorField::ApplianceStatus => FieldType::Category,
        }
    }
}

/// Descriptive statistics of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericStats {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation.
    pub std: f64,
    pub min: f64,
    #[serde(rename = "25%")]
    pub p25: f64,
    #[serde(rename = "50%")]
    pub p50: f64,
    #[serde(rename = "75%")]
    pub p75: f64,
    pub max: f64,
}

impl NumericStats {
    /// Compute over a sample; `None` when the sample is empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let sorted = stats::sorted(values);
        Some(Self {
            count: sorted.len(),
            mean: stats::mean(&sorted)?,
            std: stats::population_std(&sorted)?,
            min: *sorted.first()?,
            p25: stats::percentile_of_sorted(&sorted, 0.25)?,
            p50: stats::percentile_of_sorted(&sorted, 0.5)?,
            p75: stats::percentile_of_sorted(&sorted, 0.75)?,
            max: *sorted.last()?,
        })
    }
}

/// Overview of a record set, raw or cleaned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSummary {
    pub total_records: usize,
    pub total_columns: usize,
    pub missing_values: BTreeMap<SensorField, usize>,
    pub total_missing: usize,
    /// Rows repeating an earlier row.
    pub duplicate_rows: usize,
    pub data_types: BTreeMap<SensorField, FieldType>,
    /// Only fields with at least one value appear here.
    pub numeric_summary: BTreeMap<SensorField, NumericStats>,
}

impl Processor {
    /// Summarize raw or cleaned records.
    pub fn summarize<R: AsRef<RawRecord>>(&self, records: &[R]) -> DataSummary {
        let mut missing_values = BTreeMap::new();
        let mut data_types = BTreeMap::new();
        let mut numeric_summary = BTreeMap::new();

        for field in SensorField::ALL {
            let missing = records
                .iter()
                .filter(|r| r.as_ref().is_missing(field))
                .count();
            missing_values.insert(field, missing);

            let observed = if missing == records.len() {
                FieldType::Null
            } else {
                FieldType::of(field)
            };
            data_types.insert(field, observed);

            if field.is_numeric() {
                let values: Vec<f64> = records
                    .iter()
                    .filter_map(|r| r.as_ref().value(field))
                    .collect();
                if let Some(stats) = NumericStats::from_values(&values) {
                    numeric_summary.insert(field, stats);
                }
            }
        }

        DataSummary {
            total_records: records.len(),
            total_columns: SensorField::ALL.len(),
            total_missing: missing_values.values().sum(),
            missing_values,
            duplicate_rows: count_duplicates(records),
            data_types,
            numeric_summary,
        }
    }
}
