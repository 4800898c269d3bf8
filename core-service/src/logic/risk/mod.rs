//! Risk Module
//!
//! Maps a sector's risk score to a discrete level and color bucket.
//! Used both for rendering and for alert severity.
//!
//! ## Structure
//! - `types`: RiskLevel, Trend
//! - `rules`: Score bounds and bucket cutoffs
//! - `classifier`: Classification logic
//!
//! ## Usage
//! ```
//! use sentinel_core::logic::risk::{classify, RiskLevel};
//!
//! assert_eq!(classify(92.0), RiskLevel::Critical);
//! assert_eq!(classify(64.0), RiskLevel::High);
//! assert_eq!(classify(-3.0), RiskLevel::Low);
//! ```

pub mod types;
pub mod rules;
pub mod classifier;

pub use types::{RiskLevel, Trend};

pub use rules::{
    CRITICAL_THRESHOLD,
    DEFAULT_ALERT_THRESHOLD,
    HIGH_THRESHOLD,
    SCORE_MAX,
    SCORE_MIN,
};

pub use classifier::{classify, classify_reading, clamp_score, disagreeing_trends, label_disagrees};
