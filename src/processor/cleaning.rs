//! Cleaning stage: deduplication, median imputation, feature extraction.

use super::Processor;
use crate::record::{CleanedRecord, RawRecord, SensorField};
use crate::stats;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Counters reported by one [`Processor::prepare`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparationSummary {
    pub duplicates_removed: usize,
    pub missing_values_filled: usize,
    pub total_records: usize,
    /// Numeric fields with no value at all, left unfilled.
    pub unfillable_fields: Vec<SensorField>,
}

/// Output of [`Processor::prepare`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prepared {
    pub cleaned: Vec<CleanedRecord>,
    pub summary: PreparationSummary,
}

impl Processor {
    /// Deduplicate, impute missing numeric values with the field median and
    /// derive calendar and peak-hour features.
    ///
    /// Derived fields on already cleaned input are discarded and recomputed,
    /// so preparing a prepared set removes nothing.
    pub fn prepare<R: AsRef<RawRecord>>(&self, records: &[R]) -> Prepared {
        let mut deduped = remove_duplicates(records);
        let duplicates_removed = records.len() - deduped.len();

        let (missing_values_filled, unfillable_fields) = fill_missing_values(&mut deduped);
        for field in &unfillable_fields {
            warn!("no {} values present, field left unfilled", field);
        }

        let cleaned = extract_features(deduped, self.config.peak_percentile);

        debug!(
            "prepared {} records: {} duplicates removed, {} values filled",
            cleaned.len(),
            duplicates_removed,
            missing_values_filled
        );

        Prepared {
            summary: PreparationSummary {
                duplicates_removed,
                missing_values_filled,
                total_records: cleaned.len(),
                unfillable_fields,
            },
            cleaned,
        }
    }
}

/// Keep the first occurrence of every distinct row, in input order.
///
/// Rows are equal when every raw column matches, absent values included.
pub fn remove_duplicates<R: AsRef<RawRecord>>(records: &[R]) -> Vec<RawRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .iter()
        .map(AsRef::as_ref)
        .filter(|r| seen.insert(r.row_key()))
        .cloned()
        .collect()
}

/// Number of rows that repeat an earlier row.
pub fn count_duplicates<R: AsRef<RawRecord>>(records: &[R]) -> usize {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .iter()
        .filter(|r| !seen.insert(r.as_ref().row_key()))
        .count()
}

/// Replace absent numeric values with the median of the present ones.
///
/// Returns the number of values filled and the fields that had nothing to
/// take a median from.
fn fill_missing_values(records: &mut [RawRecord]) -> (usize, Vec<SensorField>) {
    let mut filled = 0;
    let mut unfillable = Vec::new();

    for field in SensorField::NUMERIC {
        let present: Vec<f64> = records.iter().filter_map(|r| r.value(field)).collect();
        if present.len() == records.len() {
            continue;
        }

        let Some(median) = stats::median(&present) else {
            unfillable.push(field);
            continue;
        };

        for record in records.iter_mut().filter(|r| r.is_missing(field)) {
            record.set_value(field, Some(median));
            filled += 1;
        }
        debug!("imputed {} with median {:.3}", field, median);
    }

    (filled, unfillable)
}

/// Attach hour, weekday and peak flag to every record.
fn extract_features(records: Vec<RawRecord>, peak_percentile: f64) -> Vec<CleanedRecord> {
    let energy: Vec<f64> = records.iter().filter_map(|r| r.energy_usage).collect();
    let threshold = stats::nearest_rank_percentile(&energy, peak_percentile);
    if let Some(t) = threshold {
        debug!("peak energy threshold {:.3} kWh", t);
    }

    records
        .into_iter()
        .map(|record| {
            let is_peak = match (record.energy_usage, threshold) {
                (Some(e), Some(t)) => e > t,
                _ => false,
            };
            CleanedRecord::from_raw(record, is_peak)
        })
        .collect()
}
