//! Dashboard insights over cleaned records.

use super::charts::hourly_energy_means;
use super::{check_cleaned, Processor};
use crate::error::Result;
use crate::record::CleanedRecord;
use crate::stats::{self, round_to};
use serde::{Deserialize, Serialize};

/// Scalar aggregates shown on the dashboard.
///
/// Values derived from a numeric field are `None` when that field has no
/// value in the whole set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub avg_temperature: Option<f64>,
    pub min_temperature: Option<f64>,
    pub max_temperature: Option<f64>,
    pub avg_humidity: Option<f64>,
    pub total_energy: Option<f64>,
    pub avg_energy: Option<f64>,
    /// Hour of day with the highest mean energy usage.
    pub peak_hour: Option<u32>,
    pub motion_detections: usize,
    pub motion_percentage: f64,
    pub appliances_on: usize,
    pub appliance_on_percentage: f64,
}

impl Processor {
    /// Compute dashboard insights.
    pub fn insights(&self, records: &[CleanedRecord]) -> Result<Insights> {
        check_cleaned(records, "insights")?;
        let decimals = self.config.decimals;
        let round = |v: f64| round_to(v, decimals);

        let temperatures: Vec<f64> = records.iter().filter_map(|r| r.temperature()).collect();
        let humidities: Vec<f64> = records.iter().filter_map(|r| r.humidity()).collect();
        let energies: Vec<f64> = records.iter().filter_map(|r| r.energy_usage()).collect();

        let total_energy = if energies.is_empty() {
            None
        } else {
            Some(energies.iter().sum::<f64>())
        };

        let motion_detections = records
            .iter()
            .filter(|r| r.record.motion_detected == 1)
            .count();
        let appliances_on = records
            .iter()
            .filter(|r| r.record.appliance_status.is_on())
            .count();

        Ok(Insights {
            avg_temperature: stats::mean(&temperatures).map(round),
            min_temperature: temperatures.iter().copied().reduce(f64::min).map(round),
            max_temperature: temperatures.iter().copied().reduce(f64::max).map(round),
            avg_humidity: stats::mean(&humidities).map(round),
            total_energy: total_energy.map(round),
            avg_energy: stats::mean(&energies).map(round),
            peak_hour: peak_hour(records),
            motion_detections,
            motion_percentage: round(stats::percentage(motion_detections, records.len())),
            appliances_on,
            appliance_on_percentage: round(stats::percentage(appliances_on, records.len())),
        })
    }
}

/// Hour with the highest mean energy; ties go to the earliest hour.
fn peak_hour(records: &[CleanedRecord]) -> Option<u32> {
    let mut best: Option<(u32, f64)> = None;
    for (hour, mean) in hourly_energy_means(records) {
        match best {
            Some((_, top)) if mean <= top => {}
            _ => best = Some((hour, mean)),
        }
    }
    best.map(|(hour, _)| hour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HomesenseError;
    use crate::record::{ApplianceStatus, RawRecord};
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn cleaned(hour: i64, energy: f64, motion: u8, status: ApplianceStatus) -> CleanedRecord {
        let raw = RawRecord::new(
            start() + Duration::hours(hour),
            Some(15.0 + hour as f64),
            Some(50.0),
            Some(energy),
            motion,
            status,
        );
        CleanedRecord::from_raw(raw, false)
    }

    #[test]
    fn test_peak_hour_with_increasing_energy() {
        let records: Vec<CleanedRecord> = (0..24)
            .map(|h| cleaned(h, 0.5 + h as f64 * 0.1, 0, ApplianceStatus::Off))
            .collect();

        let insights = Processor::new().insights(&records).unwrap();
        assert_eq!(insights.peak_hour, Some(23));
    }

    #[test]
    fn test_peak_hour_tie_goes_to_lowest_hour() {
        let records = vec![
            cleaned(5, 2.0, 0, ApplianceStatus::Off),
            cleaned(3, 2.0, 0, ApplianceStatus::Off),
            cleaned(9, 1.0, 0, ApplianceStatus::Off),
        ];

        let insights = Processor::new().insights(&records).unwrap();
        assert_eq!(insights.peak_hour, Some(3));
    }

    #[test]
    fn test_aggregates_and_percentages() {
        let records = vec![
            cleaned(0, 1.0, 1, ApplianceStatus::On),
            cleaned(1, 2.0, 0, ApplianceStatus::Off),
            cleaned(2, 3.5, 0, ApplianceStatus::Off),
        ];

        let insights = Processor::new().insights(&records).unwrap();
        assert_eq!(insights.min_temperature, Some(15.0));
        assert_eq!(insights.max_temperature, Some(17.0));
        assert_eq!(insights.avg_temperature, Some(16.0));
        assert_eq!(insights.avg_humidity, Some(50.0));
        assert_eq!(insights.total_energy, Some(6.5));
        assert_eq!(insights.avg_energy, Some(2.17));
        assert_eq!(insights.motion_detections, 1);
        assert_eq!(insights.motion_percentage, 33.33);
        assert_eq!(insights.appliances_on, 1);
        assert_eq!(insights.appliance_on_percentage, 33.33);
    }

    #[test]
    fn test_percentage_is_rounded_not_truncated() {
        // 1 of 6 = 16.666..%
        let mut records: Vec<CleanedRecord> = (0..6)
            .map(|h| cleaned(h, 1.0, 0, ApplianceStatus::Off))
            .collect();
        records[0].record.motion_detected = 1;

        let insights = Processor::new().insights(&records).unwrap();
        assert_eq!(insights.motion_percentage, 16.67);
    }

    #[test]
    fn test_missing_field_yields_none() {
        let mut records = vec![cleaned(0, 1.0, 0, ApplianceStatus::Off)];
        records[0].record.humidity = None;

        let insights = Processor::new().insights(&records).unwrap();
        assert_eq!(insights.avg_humidity, None);
        assert_eq!(insights.avg_energy, Some(1.0));
    }

    #[test]
    fn test_precondition_failures() {
        let err = Processor::new().insights(&[]).unwrap_err();
        assert!(matches!(err, HomesenseError::PreconditionFailed(_)));

        let mut records = vec![cleaned(0, 1.0, 0, ApplianceStatus::Off)];
        records[0].day_name = "Friday".to_string();
        let err = Processor::new().insights(&records).unwrap_err();
        assert!(matches!(err, HomesenseError::PreconditionFailed(_)));
    }
}
