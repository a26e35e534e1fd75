// Homesense Testdata - Smart home dataset generator
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! # Homesense Testdata
//!
//! Reproducible smart home sensor data for the Homesense pipeline.
//!
//! This crate generates hourly records with:
//!
//! - **Daily cycles**: temperature peaks mid-afternoon, humidity follows it
//!   inversely, energy and motion are higher during the day
//! - **Defect injection**: missing readings and appended duplicate rows
//! - **Reproducibility**: an explicit seeded RNG, never a global one
//!
//! ## Quick Start
//!
//! ```rust
//! use homesense::Processor;
//! use homesense_testdata::{Generator, GeneratorConfig};
//!
//! let generator = Generator::new(GeneratorConfig::new().with_seed(42)).unwrap();
//! let raw = generator.generate(30, 24).unwrap();
//! assert_eq!(raw.len(), 720 + 14);
//!
//! let prepared = Processor::new().prepare(&raw);
//! assert_eq!(prepared.summary.total_records, 720);
//! ```

pub mod dataset;
pub mod defects;
pub mod generator;
pub mod patterns;

// Re-exports for convenience
pub use dataset::{Dataset, DatasetMetadata};
pub use defects::DefectReport;
pub use generator::{generate, Generator, GeneratorConfig, DEFAULT_DAYS, DEFAULT_RECORDS_PER_DAY};
pub use patterns::Gaussian;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
