//! Alert Log Builder
//!
//! Pure: readings in, one immutable entry out. Never touches a log.

use chrono::{DateTime, Utc};

use super::types::{AlertId, AlertLogEntry, Audience};
use crate::logic::risk::classify;
use crate::logic::telemetry::{summarize, SectorReading};

/// Build an alert entry for one snapshot.
///
/// Severity comes from the max score over ALL readings, not just the
/// affected ones, so a sector below threshold can still set the level.
/// Historical alerts were logged this way; keep it.
pub fn build_alert_entry(
    readings: &[SectorReading],
    threshold: f64,
    audience: Audience,
    message: &str,
    now: DateTime<Utc>,
) -> AlertLogEntry {
    let summary = summarize(readings, threshold);
    let risk_level = classify(summary.max_score);

    AlertLogEntry::new(
        AlertId::generate(now),
        now,
        summary.affected_zones(),
        risk_level,
        threshold,
        audience,
        message.to_string(),
    )
}

// ============================================================================
// TESTS
// ============================================================================
