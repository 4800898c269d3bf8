//! Sector Reading
//!
//! One telemetry row per sector in a snapshot.

use serde::{Deserialize, Serialize};

use crate::logic::risk::{clamp_score, Trend};

/// Risk telemetry for a single sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorReading {
    /// Unique per sector within a snapshot
    pub zone: String,
    /// Probability-like risk percentage, 0 - 100
    pub risk_score: f64,
    /// Descriptive label, independent of `risk_score`
    #[serde(default)]
    pub trend: Trend,
}

impl SectorReading {
    pub fn new(zone: &str, risk_score: f64, trend: Trend) -> Self {
        Self {
            zone: zone.to_string(),
            risk_score,
            trend,
        }
    }

    /// Score clamped into [0, 100]
    pub fn clamped_score(&self) -> f64 {
        clamp_score(self.risk_score)
    }
}
