//! Risk Types
//!
//! Core types for sector risk classification.
//! No logic here - data structures and their labels only.

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK LEVEL
// ============================================================================

/// Coarse risk bucket derived from a sector's numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Score at or below the high threshold
    Low,
    /// Only reachable through the trend vocabulary, never from `classify`
    Moderate,
    /// Above 50, up to and including 80
    High,
    /// Above 80
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            RiskLevel::Low => 0,
            RiskLevel::Moderate => 1,
            RiskLevel::High => 2,
            RiskLevel::Critical => 3,
        }
    }

    /// Color bucket used by map overlays and badges
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#10b981",      // Green
            RiskLevel::Moderate => "#f59e0b", // Amber
            RiskLevel::High => "#f97316",     // Orange
            RiskLevel::Critical => "#ef4444", // Red
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// TREND LABEL
// ============================================================================

/// Free-text trend label carried by sector telemetry.
///
/// Produced upstream alongside the score and not derived from it, so the two
/// may disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    Stable,
    #[serde(rename = "Low Risk")]
    LowRisk,
    Moderate,
    Unstable,
    #[serde(rename = "High Risk")]
    HighRisk,
    Critical,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Stable => "Stable",
            Trend::LowRisk => "Low Risk",
            Trend::Moderate => "Moderate",
            Trend::Unstable => "Unstable",
            Trend::HighRisk => "High Risk",
            Trend::Critical => "Critical",
        }
    }

    /// Risk level the label reads as
    pub fn implied_level(&self) -> RiskLevel {
        match self {
            Trend::Stable | Trend::LowRisk => RiskLevel::Low,
            Trend::Moderate | Trend::Unstable => RiskLevel::Moderate,
            Trend::HighRisk => RiskLevel::High,
            Trend::Critical => RiskLevel::Critical,
        }
    }
}

impl Default for Trend {
    fn default() -> Self {
        Trend::Stable
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
