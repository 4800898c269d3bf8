//! Alert Types
//!
//! Immutable, timestamped alert log entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::logic::risk::RiskLevel;

// ============================================================================
// AUDIENCE
// ============================================================================

/// Intended recipients of an alert. Stored for audit only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Audience {
    Researchers,
    Communities,
    Public,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Researchers => "Researchers",
            Audience::Communities => "Communities",
            Audience::Public => "Public",
        }
    }

    pub fn all() -> [Audience; 3] {
        [Audience::Researchers, Audience::Communities, Audience::Public]
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Audience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Audience::all()
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown audience: {}", s))
    }
}

// ============================================================================
// ALERT ID
// ============================================================================

/// Creation time in milliseconds plus a random disambiguator,
/// e.g. `1718900000000-3f2a...`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(String);

impl AlertId {
    pub fn generate(now: DateTime<Utc>) -> Self {
        Self(format!("{}-{}", now.timestamp_millis(), Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AlertId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for AlertId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// ============================================================================
// ALERT LOG ENTRY
// ============================================================================

/// One generated alert. Fields are private so an entry cannot change after
/// the builder returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertLogEntry {
    id: AlertId,
    timestamp: DateTime<Utc>,
    affected_zones: Vec<String>,
    risk_level: RiskLevel,
    threshold: f64,
    audience: Audience,
    message: String,
}

impl AlertLogEntry {
    pub(crate) fn new(
        id: AlertId,
        timestamp: DateTime<Utc>,
        affected_zones: Vec<String>,
        risk_level: RiskLevel,
        threshold: f64,
        audience: Audience,
        message: String,
    ) -> Self {
        Self {
            id,
            timestamp,
            affected_zones,
            risk_level,
            threshold,
            audience,
            message,
        }
    }

    pub fn id(&self) -> &AlertId {
        &self.id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn affected_zones(&self) -> &[String] {
        &self.affected_zones
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn audience(&self) -> Audience {
        self.audience
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Equal in every field except `id`
    pub fn same_content(&self, other: &AlertLogEntry) -> bool {
        self.timestamp == other.timestamp
            && self.affected_zones == other.affected_zones
            && self.risk_level == other.risk_level
            && self.threshold == other.threshold
            && self.audience == other.audience
            && self.message == other.message
    }

    /// Serialize to a single JSON line (for JSONL store)
    pub fn to_jsonl(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
