//! Telemetry Module
//!
//! Sector readings and snapshot aggregation.
//!
//! ## Structure
//! - `reading.rs` - SectorReading (one row per sector)
//! - `summary.rs` - TelemetrySummary + summarize()
//! - `samples.rs` - Built-in sample snapshot

pub mod reading;
pub mod summary;
pub mod samples;

#[cfg(test)]
mod tests;

pub use reading::SectorReading;
pub use summary::{summarize, TelemetrySummary};
