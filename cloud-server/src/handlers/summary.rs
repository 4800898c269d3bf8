//! Snapshot summary handler

use axum::{extract::State, Json};
use validator::Validate;

use sentinel_core::logic::risk::classify;
use sentinel_core::logic::telemetry::summarize;

use crate::{AppResult, AppState};
use crate::extract::AppJson;
use crate::models::{check_zones, SectorClassification, SummaryRequest, SummaryResponse};

pub async fn summarize_snapshot(
    State(state): State<AppState>,
    AppJson(req): AppJson<SummaryRequest>,
) -> AppResult<Json<SummaryResponse>> {
    req.validate()?;
    check_zones(&req.readings)?;

    let threshold = state.config.effective_threshold(req.threshold);
    let summary = summarize(&req.readings, threshold);
    let level = classify(summary.max_score);

    Ok(Json(SummaryResponse {
        threshold,
        affected_count: summary.affected_count(),
        level,
        color: level.color(),
        sectors: req.readings.iter().map(SectorClassification::from).collect(),
        summary,
    }))
}
