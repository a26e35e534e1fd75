// Homesense Testdata - Dataset structures
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Generated record sets and their generation metadata.

use crate::defects::DefectReport;
use chrono::NaiveDateTime;
use homesense::{RawRecord, SensorField};
use serde::{Deserialize, Serialize};

/// How a dataset was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetMetadata {
    /// Generation seed (`None` when a caller-supplied RNG was used).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Timestamp of the first generated hour.
    pub start: NaiveDateTime,
    pub num_days: usize,
    pub records_per_day: usize,
    /// Records generated before duplicates were appended.
    pub base_records: usize,
    pub defects: DefectReport,
}

/// A generated record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Records in shuffled order.
    pub records: Vec<RawRecord>,
    pub metadata: DatasetMetadata,
}

impl Dataset {
    /// Get number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get all records.
    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    /// Take the records, dropping the metadata.
    pub fn into_records(self) -> Vec<RawRecord> {
        self.records
    }

    /// Get a numeric column.
    pub fn column(&self, field: SensorField) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.value(field)).collect()
    }

    /// Count of missing readings across all numeric columns.
    pub fn missing_count(&self) -> usize {
        self.records.iter().map(RawRecord::missing_count).sum()
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use homesense::ApplianceStatus;

    fn dataset() -> Dataset {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let record = RawRecord::new(start, None, Some(60.0), Some(1.0), 1, ApplianceStatus::On);
        Dataset {
            records: vec![record.clone(), record],
            metadata: DatasetMetadata {
                seed: Some(42),
                start,
                num_days: 1,
                records_per_day: 1,
                base_records: 1,
                defects: DefectReport {
                    missing_injected: 1,
                    duplicates_injected: 1,
                },
            },
        }
    }

    #[test]
    fn test_accessors() {
        let ds = dataset();
        assert_eq!(ds.len(), 2);
        assert!(!ds.is_empty());
        assert_eq!(ds.missing_count(), 2);
        assert_eq!(ds.column(SensorField::Humidity), vec![Some(60.0), Some(60.0)]);
    }

    #[test]
    fn test_json_roundtrip() {
        let ds = dataset();
        let json = ds.to_json().unwrap();
        assert!(json.contains("\"temperature\": null"));
        assert!(json.contains("\"applianceStatus\": \"ON\""));

        let loaded = Dataset::from_json(&json).unwrap();
        assert_eq!(loaded, ds);
    }
}
