//! Alert request/response models

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use sentinel_core::logic::analysis::AnalysisContext;
use sentinel_core::logic::alert::Audience;
use sentinel_core::logic::risk::{classify_reading, label_disagrees, RiskLevel};
use sentinel_core::logic::telemetry::{SectorReading, TelemetrySummary};

use crate::AppError;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlertRequest {
    pub readings: Vec<SectorReading>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub threshold: Option<f64>,
    pub audience: Option<Audience>,
    #[validate(length(max = 20000))]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub readings: Vec<SectorReading>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub threshold: Option<f64>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PromptRequest {
    pub context: AnalysisContext,
    pub readings: Vec<SectorReading>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub threshold: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct AlertFilter {
    pub limit: Option<usize>,
}

/// Zones must be non-empty and unique within one snapshot
pub fn check_zones(readings: &[SectorReading]) -> Result<(), AppError> {
    let mut seen = HashSet::with_capacity(readings.len());
    for reading in readings {
        let zone = reading.zone.trim();
        if zone.is_empty() {
            return Err(AppError::ValidationError("zone must not be empty".to_string()));
        }
        if !seen.insert(zone) {
            return Err(AppError::ValidationError(format!("duplicate zone: {}", zone)));
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorClassification {
    pub zone: String,
    pub risk_score: f64,
    pub level: RiskLevel,
    pub color: &'static str,
    pub label_disagrees: bool,
}

impl From<&SectorReading> for SectorClassification {
    fn from(reading: &SectorReading) -> Self {
        let level = classify_reading(reading);
        Self {
            zone: reading.zone.clone(),
            risk_score: reading.clamped_score(),
            level,
            color: level.color(),
            label_disagrees: label_disagrees(reading),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub threshold: f64,
    #[serde(flatten)]
    pub summary: TelemetrySummary,
    pub affected_count: usize,
    pub level: RiskLevel,
    pub color: &'static str,
    pub sectors: Vec<SectorClassification>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptResponse {
    pub context: AnalysisContext,
    pub prompt: String,
}
