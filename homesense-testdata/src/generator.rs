// Homesense Testdata - Core generator
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Core dataset generation logic.
//!
//! One record is produced per hour offset from the configured start, then
//! readings are blanked, rows duplicated and the whole set shuffled.

use crate::dataset::{Dataset, DatasetMetadata};
use crate::defects::{self, DefectReport};
use crate::patterns::{self, Gaussian, HUMIDITY_RANGE, MIN_ENERGY, TEMPERATURE_RANGE};
use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use homesense::{ApplianceStatus, HomesenseError, RawRecord, Result};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Bernoulli, Distribution};
use serde::{Deserialize, Serialize};

/// Default generation seed.
pub const DEFAULT_SEED: u64 = 42;
/// Default number of simulated days.
pub const DEFAULT_DAYS: usize = 30;
/// Default number of records per day (hourly).
pub const DEFAULT_RECORDS_PER_DAY: usize = 24;
/// Upper bound on `num_days * records_per_day`.
pub const MAX_RECORDS: usize = 1_000_000;

/// First simulated hour: 2024-01-01 00:00:00.
pub fn default_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Random seed for reproducibility.
    pub seed: u64,
    /// Timestamp of the first record.
    pub start: NaiveDateTime,
    /// Fraction of records that lose one reading.
    pub missing_fraction: f64,
    /// Fraction of records appended again as duplicates.
    pub duplicate_fraction: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            start: default_start(),
            missing_fraction: 0.05,
            duplicate_fraction: 0.02,
        }
    }
}

impl GeneratorConfig {
    /// Create a new generator config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set start timestamp.
    pub fn with_start(mut self, start: NaiveDateTime) -> Self {
        self.start = start;
        self
    }

    /// Set the fraction of records with a missing reading.
    pub fn with_missing_fraction(mut self, fraction: f64) -> Self {
        self.missing_fraction = fraction;
        self
    }

    /// Set the fraction of records duplicated.
    pub fn with_duplicate_fraction(mut self, fraction: f64) -> Self {
        self.duplicate_fraction = fraction;
        self
    }

    /// Check that both defect fractions are in [0, 1].
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("missing_fraction", self.missing_fraction),
            ("duplicate_fraction", self.duplicate_fraction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(HomesenseError::invalid_argument(format!(
                    "{} must be in [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Smart home dataset generator.
///
/// Each call to [`Generator::generate`] seeds a fresh RNG from the
/// configuration, so one generator always returns the same data for the
/// same arguments. Use [`Generator::generate_with_rng`] to drive generation
/// from a stream you own.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator from a validated configuration.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a generator with default settings and the given seed.
    ///
    /// Needs no validation: the seed takes any value and the remaining
    /// settings are the defaults.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::default().with_seed(seed),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate `num_days * records_per_day` hourly records plus injected
    /// duplicates, in shuffled order.
    pub fn generate(&self, num_days: usize, records_per_day: usize) -> Result<Vec<RawRecord>> {
        self.generate_dataset(num_days, records_per_day)
            .map(Dataset::into_records)
    }

    /// Like [`Generator::generate`], keeping the generation metadata.
    pub fn generate_dataset(&self, num_days: usize, records_per_day: usize) -> Result<Dataset> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut dataset = self.generate_with_rng(num_days, records_per_day, &mut rng)?;
        dataset.metadata.seed = Some(self.config.seed);
        Ok(dataset)
    }

    /// Generate using a caller-owned RNG instead of the configured seed.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        num_days: usize,
        records_per_day: usize,
        rng: &mut R,
    ) -> Result<Dataset> {
        let total = record_count(num_days, records_per_day)?;
        let timestamps = hourly_timestamps(self.config.start, total)?;

        let mut records = Vec::with_capacity(total + total / 10);
        for timestamp in timestamps {
            records.push(sample_hour(timestamp, timestamp.hour(), rng)?);
        }

        let missing_injected = defects::inject_missing(&mut records, self.config.missing_fraction, rng);
        let duplicates_injected =
            defects::inject_duplicates(&mut records, total, self.config.duplicate_fraction, rng);
        defects::shuffle(&mut records, rng);

        debug!(
            "generated {} records ({} base, {} blanked readings, {} duplicates)",
            records.len(),
            total,
            missing_injected,
            duplicates_injected
        );

        Ok(Dataset {
            records,
            metadata: DatasetMetadata {
                seed: None,
                start: self.config.start,
                num_days,
                records_per_day,
                base_records: total,
                defects: DefectReport {
                    missing_injected,
                    duplicates_injected,
                },
            },
        })
    }
}

/// Generate with the default configuration.
pub fn generate(num_days: usize, records_per_day: usize) -> Result<Vec<RawRecord>> {
    Generator::default().generate(num_days, records_per_day)
}

fn record_count(num_days: usize, records_per_day: usize) -> Result<usize> {
    if num_days == 0 {
        return Err(HomesenseError::invalid_argument("num_days must be at least 1"));
    }
    if records_per_day == 0 {
        return Err(HomesenseError::invalid_argument(
            "records_per_day must be at least 1",
        ));
    }
    match num_days.checked_mul(records_per_day) {
        Some(total) if total <= MAX_RECORDS => Ok(total),
        _ => Err(HomesenseError::invalid_argument(format!(
            "num_days * records_per_day must not exceed {}",
            MAX_RECORDS
        ))),
    }
}

/// One timestamp per hour from `start`, failing if the range leaves the
/// representable calendar.
fn hourly_timestamps(start: NaiveDateTime, total: usize) -> Result<Vec<NaiveDateTime>> {
    (0..total)
        .map(|i| {
            start
                .checked_add_signed(Duration::hours(i as i64))
                .ok_or_else(|| {
                    HomesenseError::invalid_argument(format!(
                        "{} hourly records starting at {} exceed the supported date range",
                        total, start
                    ))
                })
        })
        .collect()
}

/// Draw one clean record for the given hour of day.
fn sample_hour<R: Rng + ?Sized>(
    timestamp: NaiveDateTime,
    hour: u32,
    rng: &mut R,
) -> Result<RawRecord> {
    let (t_min, t_max) = TEMPERATURE_RANGE;
    let temperature = Gaussian::new(patterns::daily_temperature(hour), patterns::TEMPERATURE_NOISE)
        .sample(rng)
        .clamp(t_min, t_max);

    let (h_min, h_max) = HUMIDITY_RANGE;
    let humidity = Gaussian::new(patterns::humidity_baseline(temperature), patterns::HUMIDITY_NOISE)
        .sample(rng)
        .clamp(h_min, h_max);

    let energy_usage = patterns::energy_profile(hour).sample(rng).max(MIN_ENERGY);

    let motion = bernoulli(patterns::motion_probability(hour))?.sample(rng);
    let appliance_on = bernoulli(patterns::appliance_on_probability(energy_usage))?.sample(rng);

    Ok(RawRecord::new(
        timestamp,
        Some(temperature),
        Some(humidity),
        Some(energy_usage),
        u8::from(motion),
        if appliance_on {
            ApplianceStatus::On
        } else {
            ApplianceStatus::Off
        },
    ))
}

fn bernoulli(p: f64) -> Result<Bernoulli> {
    Bernoulli::new(p).map_err(|e| HomesenseError::invalid_argument(e.to_string()))
}
