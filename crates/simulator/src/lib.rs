//! `gildedrose-simulator`
//!
//! Day-by-day harness around the inventory update: seeds the standard
//! catalogue, advances it a configured number of days and renders every day.

pub mod catalogue;
pub mod config;
pub mod report;

pub use catalogue::standard_catalogue;
pub use config::{ConfigError, OutputFormat, SimulatorConfig};
pub use report::{DaySnapshot, render, simulate};
