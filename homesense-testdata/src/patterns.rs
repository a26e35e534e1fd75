// Homesense Testdata - Daily sensor patterns
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Daily behaviour of the simulated home.
//!
//! Every function here is a pure function of the hour of day (or of an
//! already drawn reading), so the shape of the signal can be tested
//! without any randomness. Noise is added by the generator through
//! [`Gaussian`].

use rand::Rng;
use rand_distr::Distribution;
use std::f64::consts::PI;
use std::ops::RangeInclusive;

/// Valid temperature range in °C.
pub const TEMPERATURE_RANGE: (f64, f64) = (15.0, 35.0);
/// Valid humidity range in %.
pub const HUMIDITY_RANGE: (f64, f64) = (30.0, 90.0);
/// Lowest possible energy reading in kWh.
pub const MIN_ENERGY: f64 = 0.1;

/// Hours with daytime energy consumption.
pub const DAYTIME_HOURS: RangeInclusive<u32> = 6..=22;
/// Hours in which occupants are usually moving around.
pub const ACTIVE_HOURS: RangeInclusive<u32> = 7..=22;

/// Noise of the temperature reading around the daily cycle.
pub const TEMPERATURE_NOISE: f64 = 2.0;
/// Noise of the humidity reading around its baseline.
pub const HUMIDITY_NOISE: f64 = 5.0;

/// Energy above which appliances are likely running.
pub const HIGH_ENERGY_KWH: f64 = 2.0;

/// Daily temperature cycle: trough near dawn, peak mid-afternoon.
///
/// `20 + 8 * sin((hour - 6) * PI / 12)`
pub fn daily_temperature(hour: u32) -> f64 {
    20.0 + 8.0 * ((hour as f64 - 6.0) * PI / 12.0).sin()
}

/// Humidity falls as temperature rises.
pub fn humidity_baseline(temperature: f64) -> f64 {
    60.0 - 1.5 * (temperature - 20.0)
}

/// Mean and spread of energy usage for the hour.
///
/// Daytime draws roughly three times the night baseline.
pub fn energy_profile(hour: u32) -> Gaussian {
    if DAYTIME_HOURS.contains(&hour) {
        Gaussian::new(2.5, 0.5)
    } else {
        Gaussian::new(0.8, 0.3)
    }
}

/// Probability of a motion event during the hour.
pub fn motion_probability(hour: u32) -> f64 {
    if ACTIVE_HOURS.contains(&hour) {
        0.4
    } else {
        0.1
    }
}

/// Probability that the appliance is ON given the energy drawn.
pub fn appliance_on_probability(energy_usage: f64) -> f64 {
    if energy_usage > HIGH_ENERGY_KWH {
        0.8
    } else {
        0.3
    }
}

/// Normal distribution sampled with the Box-Muller transform.
///
/// Each sample consumes exactly two uniform draws, which keeps the
/// stream position predictable for a given seed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    pub mean: f64,
    pub std_dev: f64,
}

impl Gaussian {
    pub const fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }
}

impl Distribution<f64> for Gaussian {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // gen() is in [0, 1); flip it so ln() never sees 0
        let u1 = 1.0 - rng.gen::<f64>();
        let u2 = rng.gen::<f64>();
        let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        z0 * self.std_dev + self.mean
    }
}
