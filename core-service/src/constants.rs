//! Central Configuration Constants
//!
//! Single source of truth for runtime defaults.
//! Each getter reads an environment variable and falls back to the default.

use std::path::PathBuf;

use crate::logic::alert::Audience;
use crate::logic::risk::{DEFAULT_ALERT_THRESHOLD, SCORE_MAX, SCORE_MIN};

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Himalayan Sentinel";

/// Audience preselected on the alert panel
pub const DEFAULT_AUDIENCE: Audience = Audience::Researchers;

/// Directory name under the local data dir
const DATA_DIR: &str = "himalayan-sentinel";

/// Alert store subdirectory
const STORE_DIR: &str = "alerts";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Alert threshold from environment or default (75)
pub fn get_alert_threshold() -> f64 {
    let raw = std::env::var("SENTINEL_THRESHOLD").ok();
    let parsed = raw.as_deref().and_then(|s| s.trim().parse::<f64>().ok());
    if raw.is_some() && !is_valid_threshold(parsed) {
        log::warn!(
            "SENTINEL_THRESHOLD={:?} is not within {}-{}, using {}",
            raw.unwrap_or_default(),
            SCORE_MIN,
            SCORE_MAX,
            DEFAULT_ALERT_THRESHOLD
        );
    }
    threshold_or_default(parsed)
}

/// Keep a configured threshold only when it lies within [0, 100]
pub fn threshold_or_default(threshold: Option<f64>) -> f64 {
    threshold
        .filter(|t| is_valid_threshold(Some(*t)))
        .unwrap_or(DEFAULT_ALERT_THRESHOLD)
}

fn is_valid_threshold(threshold: Option<f64>) -> bool {
    matches!(threshold, Some(t) if (SCORE_MIN..=SCORE_MAX).contains(&t))
}

/// Audience from environment or default
pub fn get_audience() -> Audience {
    std::env::var("SENTINEL_AUDIENCE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_AUDIENCE)
}

/// Alert store directory from environment or `<data_local_dir>/himalayan-sentinel/alerts`
pub fn get_store_dir() -> PathBuf {
    std::env::var("SENTINEL_STORE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_store_dir())
}

pub fn default_store_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR)
        .join(STORE_DIR)
}

/// Optional snapshot file (JSON array of sector readings)
pub fn get_snapshot_path() -> Option<PathBuf> {
    std::env::var("SENTINEL_SNAPSHOT")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
}

/// Optional pre-generated message for the CLI runner
pub fn get_message() -> Option<String> {
    std::env::var("SENTINEL_MESSAGE").ok()
}
