//! Risk Classifier
//!
//! Score -> RiskLevel only. Total over every f64: out-of-range input is
//! clamped before bucketing.

use super::rules::{CRITICAL_THRESHOLD, HIGH_THRESHOLD, SCORE_MAX, SCORE_MIN};
use super::types::{RiskLevel, Trend};
use crate::logic::telemetry::SectorReading;

/// Clamp a score into [0, 100]. NaN counts as 0.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return SCORE_MIN;
    }
    score.clamp(SCORE_MIN, SCORE_MAX)
}

/// Map a risk score to its bucket
pub fn classify(score: f64) -> RiskLevel {
    let score = clamp_score(score);

    if score > CRITICAL_THRESHOLD {
        RiskLevel::Critical
    } else if score > HIGH_THRESHOLD {
        RiskLevel::High
    } else {
        RiskLevel::Low
    }
}

/// Classify a single sector reading by its score
pub fn classify_reading(reading: &SectorReading) -> RiskLevel {
    classify(reading.risk_score)
}

/// True when the reading's trend label reads differently from its score.
///
/// Diagnostic only; `classify` never consults the label.
pub fn label_disagrees(reading: &SectorReading) -> bool {
    let implied = reading.trend.implied_level();
    match implied {
        // classify() has no Moderate bucket, so a Moderate/Unstable label
        // agrees with anything up to High.
        RiskLevel::Moderate => classify_reading(reading) == RiskLevel::Critical,
        level => level != classify_reading(reading),
    }
}

/// Trends whose label disagrees with the numeric bucket
pub fn disagreeing_trends(readings: &[SectorReading]) -> Vec<(String, Trend, RiskLevel)> {
    readings
        .iter()
        .filter(|r| label_disagrees(r))
        .map(|r| (r.zone.clone(), r.trend, classify_reading(r)))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
