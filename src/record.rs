//! Sensor record types
//!
//! A [`RawRecord`] is what the generator produces: one hourly sample with
//! optional numeric readings. A [`CleanedRecord`] only comes out of the
//! cleaning stage and carries the calendar features derived from the
//! timestamp, so aggregation code can take it by type instead of checking
//! for derived fields at runtime.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weekday names indexed by `day_of_week` (Sunday = 0).
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Appliance power state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplianceStatus {
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
}

impl ApplianceStatus {
    pub fn is_on(self) -> bool {
        self == ApplianceStatus::On
    }
}

impl fmt::Display for ApplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplianceStatus::On => write!(f, "ON"),
            ApplianceStatus::Off => write!(f, "OFF"),
        }
    }
}

/// Columns of a raw sensor record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SensorField {
    Timestamp,
    Temperature,
    Humidity,
    EnergyUsage,
    MotionDetected,
    ApplianceStatus,
}

impl SensorField {
    /// All columns, in record order.
    pub const ALL: [SensorField; 6] = [
        SensorField::Timestamp,
        SensorField::Temperature,
        SensorField::Humidity,
        SensorField::EnergyUsage,
        SensorField::MotionDetected,
        SensorField::ApplianceStatus,
    ];

    /// Columns that may be missing and are imputed during cleaning.
    pub const NUMERIC: [SensorField; 3] = [
        SensorField::Temperature,
        SensorField::Humidity,
        SensorField::EnergyUsage,
    ];

    /// Column name as exposed to the presentation layer.
    pub fn name(self) -> &'static str {
        match self {
            SensorField::Timestamp => "timestamp",
            SensorField::Temperature => "temperature",
            SensorField::Humidity => "humidity",
            SensorField::EnergyUsage => "energyUsage",
            SensorField::MotionDetected => "motionDetected",
            SensorField::ApplianceStatus => "applianceStatus",
        }
    }

    pub fn is_numeric(self) -> bool {
        Self::NUMERIC.contains(&self)
    }
}

impl fmt::Display for SensorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One simulated hourly sensor sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// Local wall-clock time of the sample.
    pub timestamp: NaiveDateTime,
    /// Temperature in °C.
    pub temperature: Option<f64>,
    /// Relative humidity in %.
    pub humidity: Option<f64>,
    /// Energy usage in kWh.
    pub energy_usage: Option<f64>,
    /// 1 when motion was detected during the hour.
    pub motion_detected: u8,
    pub appliance_status: ApplianceStatus,
}

impl RawRecord {
    /// Create a new record.
    pub fn new(
        timestamp: NaiveDateTime,
        temperature: Option<f64>,
        humidity: Option<f64>,
        energy_usage: Option<f64>,
        motion_detected: u8,
        appliance_status: ApplianceStatus,
    ) -> Self {
        Self {
            timestamp,
            temperature,
            humidity,
            energy_usage,
            motion_detected,
            appliance_status,
        }
    }

    /// Value of a numeric column. Non-numeric columns return `None`.
    pub fn value(&self, field: SensorField) -> Option<f64> {
        match field {
            SensorField::Temperature => self.temperature,
            SensorField::Humidity => self.humidity,
            SensorField::EnergyUsage => self.energy_usage,
            _ => None,
        }
    }

    /// Overwrite a numeric column. Non-numeric columns are left untouched.
    pub fn set_value(&mut self, field: SensorField, value: Option<f64>) {
        match field {
            SensorField::Temperature => self.temperature = value,
            SensorField::Humidity => self.humidity = value,
            SensorField::EnergyUsage => self.energy_usage = value,
            _ => {}
        }
    }

    /// Whether a column holds no value.
    pub fn is_missing(&self, field: SensorField) -> bool {
        field.is_numeric() && self.value(field).is_none()
    }

    /// Number of missing numeric columns.
    pub fn missing_count(&self) -> usize {
        SensorField::NUMERIC
            .iter()
            .filter(|f| self.is_missing(**f))
            .count()
    }

    /// Exact-equality key over every column, absent values included.
    pub(crate) fn row_key(&self) -> RowKey {
        RowKey {
            timestamp: self.timestamp,
            temperature: self.temperature.map(f64::to_bits),
            humidity: self.humidity.map(f64::to_bits),
            energy_usage: self.energy_usage.map(f64::to_bits),
            motion_detected: self.motion_detected,
            appliance_status: self.appliance_status,
        }
    }
}

impl AsRef<RawRecord> for RawRecord {
    fn as_ref(&self) -> &RawRecord {
        self
    }
}

/// Hashable identity of a record's raw columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct RowKey {
    timestamp: NaiveDateTime,
    temperature: Option<u64>,
    humidity: Option<u64>,
    energy_usage: Option<u64>,
    motion_detected: u8,
    appliance_status: ApplianceStatus,
}

/// A deduplicated, imputed record with calendar features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanedRecord {
    #[serde(flatten)]
    pub record: RawRecord,
    /// Hour of day (0-23).
    pub hour: u32,
    /// Day of week, Sunday = 0.
    pub day_of_week: u32,
    pub day_name: String,
    /// Energy usage above the dataset's peak threshold.
    pub is_peak_hour: bool,
}

impl CleanedRecord {
    /// Derive calendar features from the record's timestamp.
    pub fn from_raw(record: RawRecord, is_peak_hour: bool) -> Self {
        let hour = record.timestamp.hour();
        let day_of_week = record.timestamp.weekday().num_days_from_sunday();
        Self {
            record,
            hour,
            day_of_week,
            day_name: DAY_NAMES[day_of_week as usize].to_string(),
            is_peak_hour,
        }
    }

    /// Whether the derived fields agree with the timestamp.
    pub fn features_consistent(&self) -> bool {
        let ts = self.record.timestamp;
        let dow = ts.weekday().num_days_from_sunday();
        self.hour == ts.hour() && self.day_of_week == dow && self.day_name == DAY_NAMES[dow as usize]
    }

    pub fn temperature(&self) -> Option<f64> {
        self.record.temperature
    }

    pub fn humidity(&self) -> Option<f64> {
        self.record.humidity
    }

    pub fn energy_usage(&self) -> Option<f64> {
        self.record.energy_usage
    }
}

impl AsRef<RawRecord> for CleanedRecord {
    fn as_ref(&self) -> &RawRecord {
        &self.record
    }
}
