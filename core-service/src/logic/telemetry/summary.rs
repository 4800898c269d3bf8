//! Telemetry Summary
//!
//! Aggregates a snapshot against a threshold: the global max score and the
//! ordered subset of sectors above the threshold.

use serde::{Deserialize, Serialize};

use super::reading::SectorReading;

/// Aggregate view of one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetrySummary {
    /// Max clamped score across ALL readings (0 when empty)
    pub max_score: f64,
    /// Readings strictly above the threshold, in input order
    pub affected: Vec<SectorReading>,
    /// Number of readings summarized
    pub total: usize,
}

impl TelemetrySummary {
    pub fn affected_count(&self) -> usize {
        self.affected.len()
    }

    pub fn affected_zones(&self) -> Vec<String> {
        self.affected.iter().map(|r| r.zone.clone()).collect()
    }
}

/// Summarize readings against `threshold`.
///
/// The threshold is not clamped; only scores are.
pub fn summarize(readings: &[SectorReading], threshold: f64) -> TelemetrySummary {
    let max_score = readings
        .iter()
        .map(SectorReading::clamped_score)
        .fold(0.0_f64, f64::max);

    let affected = readings
        .iter()
        .filter(|r| r.clamped_score() > threshold)
        .cloned()
        .collect();

    TelemetrySummary {
        max_score,
        affected,
        total: readings.len(),
    }
}
