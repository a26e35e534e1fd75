//! Chart series for the dashboard.

use super::{check_cleaned, Processor};
use crate::error::Result;
use crate::record::{CleanedRecord, DAY_NAMES};
use serde::{Deserialize, Serialize};

/// Monday-first week, as indices into [`DAY_NAMES`].
const WEEK_ORDER: [usize; 7] = [1, 2, 3, 4, 5, 6, 0];

/// Timestamp format of the temperature series labels.
const LABEL_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Stride-sampled temperature readings, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSeries {
    pub timestamps: Vec<String>,
    pub values: Vec<f64>,
}

/// Mean energy usage per hour of day, ascending hour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlyEnergySeries {
    pub hours: Vec<u32>,
    pub values: Vec<f64>,
}

/// Mean energy usage per weekday, Monday to Sunday.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyEnergySeries {
    pub days: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub temperature: TemperatureSeries,
    pub hourly_energy: HourlyEnergySeries,
    pub daily_energy: DailyEnergySeries,
}

impl Processor {
    /// Build the three dashboard series from cleaned records.
    ///
    /// The temperature series samples every `temperature_stride`-th record
    /// in the order given, which carries no time ordering for generated
    /// data. Energy series group the whole set.
    pub fn chart_series(&self, records: &[CleanedRecord]) -> Result<ChartSeries> {
        check_cleaned(records, "chart_series")?;

        let (hours, hourly_values): (Vec<u32>, Vec<f64>) =
            hourly_energy_means(records).into_iter().unzip();

        Ok(ChartSeries {
            temperature: temperature_sample(records, self.config.temperature_stride),
            hourly_energy: HourlyEnergySeries {
                hours,
                values: hourly_values,
            },
            daily_energy: daily_energy_means(records),
        })
    }
}

fn temperature_sample(records: &[CleanedRecord], stride: usize) -> TemperatureSeries {
    let mut series = TemperatureSeries::default();
    for record in records.iter().step_by(stride) {
        // Unfillable temperatures are skipped to keep the arrays aligned
        if let Some(t) = record.temperature() {
            series
                .timestamps
                .push(record.record.timestamp.format(LABEL_FORMAT).to_string());
            series.values.push(t);
        }
    }
    series
}

/// Mean energy usage per hour present in the data, ascending.
pub(crate) fn hourly_energy_means(records: &[CleanedRecord]) -> Vec<(u32, f64)> {
    let mut sums = [(0.0f64, 0usize); 24];
    for record in records {
        if let Some(e) = record.energy_usage() {
            let slot = &mut sums[record.hour as usize % 24];
            slot.0 += e;
            slot.1 += 1;
        }
    }

    sums.iter()
        .enumerate()
        .filter(|(_, (_, count))| *count > 0)
        .map(|(hour, (sum, count))| (hour as u32, sum / *count as f64))
        .collect()
}

fn daily_energy_means(records: &[CleanedRecord]) -> DailyEnergySeries {
    let mut sums = [(0.0f64, 0usize); 7];
    for record in records {
        if let Some(e) = record.energy_usage() {
            let slot = &mut sums[record.day_of_week as usize % 7];
            slot.0 += e;
            slot.1 += 1;
        }
    }

    let mut series = DailyEnergySeries::default();
    for day in WEEK_ORDER {
        let (sum, count) = sums[day];
        if count > 0 {
            series.days.push(DAY_NAMES[day].to_string());
            series.values.push(sum / count as f64);
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProcessorConfig;
    use crate::error::HomesenseError;
    use crate::record::{ApplianceStatus, RawRecord};
    use approx::assert_relative_eq;
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    fn start() -> NaiveDateTime {
        // Monday
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn cleaned(offset_hours: i64, temp: Option<f64>, energy: f64) -> CleanedRecord {
        let raw = RawRecord::new(
            start() + Duration::hours(offset_hours),
            temp,
            Some(55.0),
            Some(energy),
            0,
            ApplianceStatus::On,
        );
        CleanedRecord::from_raw(raw, false)
    }

    #[test]
    fn test_temperature_stride_sample() {
        let records: Vec<CleanedRecord> = (0..25)
            .map(|i| cleaned(i, Some(i as f64), 1.0))
            .collect();

        let series = Processor::new().chart_series(&records).unwrap();
        assert_eq!(series.temperature.values, vec![0.0, 10.0, 20.0]);
        assert_eq!(
            series.temperature.timestamps,
            vec!["2024-01-01 00:00", "2024-01-01 10:00", "2024-01-01 20:00"]
        );
    }

    #[test]
    fn test_custom_stride_skips_missing_temperature() {
        let records = vec![
            cleaned(0, Some(20.0), 1.0),
            cleaned(1, Some(21.0), 1.0),
            cleaned(2, None, 1.0),
            cleaned(3, Some(23.0), 1.0),
        ];
        let processor =
            Processor::with_config(ProcessorConfig::new().with_temperature_stride(2)).unwrap();

        let series = processor.chart_series(&records).unwrap();
        assert_eq!(series.temperature.values, vec![20.0]);
        assert_eq!(series.temperature.timestamps.len(), 1);
    }

    #[test]
    fn test_hourly_means() {
        // Two days: hour 0 has energies 1 and 3, hour 1 has 2 and 4
        let records = vec![
            cleaned(0, Some(20.0), 1.0),
            cleaned(1, Some(20.0), 2.0),
            cleaned(24, Some(20.0), 3.0),
            cleaned(25, Some(20.0), 4.0),
        ];

        let series = Processor::new().chart_series(&records).unwrap();
        assert_eq!(series.hourly_energy.hours, vec![0, 1]);
        assert_relative_eq!(series.hourly_energy.values[0], 2.0);
        assert_relative_eq!(series.hourly_energy.values[1], 3.0);
    }

    #[test]
    fn test_daily_series_monday_first_and_omits_absent_days() {
        // Sunday (day 6 offset), then Monday, then Wednesday
        let records = vec![
            cleaned(6 * 24, Some(20.0), 5.0),
            cleaned(0, Some(20.0), 1.0),
            cleaned(2 * 24, Some(20.0), 3.0),
            cleaned(2 * 24 + 1, Some(20.0), 4.0),
        ];

        let series = Processor::new().chart_series(&records).unwrap();
        assert_eq!(series.daily_energy.days, vec!["Monday", "Wednesday", "Sunday"]);
        assert_eq!(series.daily_energy.values.len(), 3);
        assert_relative_eq!(series.daily_energy.values[1], 3.5);
        assert_relative_eq!(series.daily_energy.values[2], 5.0);
    }

    #[test]
    fn test_empty_input_fails() {
        let err = Processor::new().chart_series(&[]).unwrap_err();
        assert!(matches!(err, HomesenseError::PreconditionFailed(_)));
    }
}
