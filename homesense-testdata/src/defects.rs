// Homesense Testdata - Data-quality defect injection
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Data-quality defects for exercising the cleaning pipeline.
//!
//! Generated records are damaged the way real exports usually are:
//! some readings go missing and some rows are repeated. Duplicates are
//! always appended to the end of the set, never written over an existing
//! row, and may copy a row that already lost a reading.

use homesense::{RawRecord, SensorField};
use log::debug;
use rand::seq::{index, SliceRandom};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// What was injected into a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefectReport {
    /// Readings set to `None`.
    pub missing_injected: usize,
    /// Rows appended as exact copies.
    pub duplicates_injected: usize,
}

/// Number of rows affected by a defect fraction (rounded down).
pub fn injection_count(total: usize, fraction: f64) -> usize {
    (total as f64 * fraction).floor() as usize
}

/// Blank one numeric reading in `floor(fraction * n)` distinct records.
///
/// The field to blank is picked uniformly per record. Returns the number
/// of readings removed.
pub fn inject_missing<R: Rng + ?Sized>(
    records: &mut [RawRecord],
    fraction: f64,
    rng: &mut R,
) -> usize {
    let count = injection_count(records.len(), fraction);
    for i in index::sample(rng, records.len(), count) {
        if let Some(field) = SensorField::NUMERIC.choose(rng) {
            records[i].set_value(*field, None);
        }
    }
    debug!("blanked {} readings", count);
    count
}

/// Append copies of `floor(fraction * base_len)` distinct records taken
/// from the first `base_len` rows.
pub fn inject_duplicates<R: Rng + ?Sized>(
    records: &mut Vec<RawRecord>,
    base_len: usize,
    fraction: f64,
    rng: &mut R,
) -> usize {
    let base_len = base_len.min(records.len());
    let count = injection_count(base_len, fraction);
    let copies: Vec<RawRecord> = index::sample(rng, base_len, count)
        .into_iter()
        .map(|i| records[i].clone())
        .collect();
    records.extend(copies);
    debug!("appended {} duplicate rows", count);
    count
}

/// Uniformly permute the records (Fisher-Yates).
pub fn shuffle<R: Rng + ?Sized>(records: &mut [RawRecord], rng: &mut R) {
    records.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use homesense::ApplianceStatus;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn records(n: usize) -> Vec<RawRecord> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        (0..n)
            .map(|i| {
                RawRecord::new(
                    start + Duration::hours(i as i64),
                    Some(20.0),
                    Some(60.0),
                    Some(1.0),
                    0,
                    ApplianceStatus::Off,
                )
            })
            .collect()
    }

    #[test]
    fn test_injection_count_rounds_down() {
        assert_eq!(injection_count(720, 0.05), 36);
        assert_eq!(injection_count(720, 0.02), 14);
        assert_eq!(injection_count(49, 0.02), 0);
        assert_eq!(injection_count(10, 0.0), 0);
    }

    #[test]
    fn test_inject_missing_hits_distinct_records() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut data = records(200);

        let n = inject_missing(&mut data, 0.05, &mut rng);
        assert_eq!(n, 10);

        // One field per chosen record, so exactly n records are damaged
        let damaged = data.iter().filter(|r| r.missing_count() > 0).count();
        assert_eq!(damaged, 10);
        assert!(data.iter().all(|r| r.missing_count() <= 1));
    }

    #[test]
    fn test_inject_duplicates_appends_copies() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut data = records(100);
        let original = data.clone();

        let n = inject_duplicates(&mut data, 100, 0.05, &mut rng);
        assert_eq!(n, 5);
        assert_eq!(data.len(), 105);
        assert_eq!(&data[..100], &original[..]);

        // Appended rows are copies of distinct originals
        let stamps: HashSet<_> = data[100..].iter().map(|r| r.timestamp).collect();
        assert_eq!(stamps.len(), 5);
        for copy in &data[100..] {
            assert!(original.contains(copy));
        }
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut data = records(50);
        let original = data.clone();

        shuffle(&mut data, &mut rng);
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);
        for r in &original {
            assert!(data.contains(r));
        }
    }
}
