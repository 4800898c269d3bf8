//! Risk Classification Rules
//!
//! Score bounds and bucket cutoffs.
//! No classify logic here - constants only.

// ============================================================================
// SCORE BOUNDS
// ============================================================================

/// Lowest valid risk score
pub const SCORE_MIN: f64 = 0.0;

/// Highest valid risk score
pub const SCORE_MAX: f64 = 100.0;

// ============================================================================
// BUCKET CUTOFFS (exclusive lower bounds)
// ============================================================================

/// Strictly above this score = High
pub const HIGH_THRESHOLD: f64 = 50.0;

/// Strictly above this score = Critical
pub const CRITICAL_THRESHOLD: f64 = 80.0;

// ============================================================================
// ALERTING
// ============================================================================

/// Threshold preselected on the alert panel
pub const DEFAULT_ALERT_THRESHOLD: f64 = 75.0;
