//! Alert handlers

use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use chrono::Utc;
use validator::Validate;

use sentinel_core::logic::alert::{build_alert_entry, AlertId, AlertLogEntry, ExportBundle};
use sentinel_core::logic::analysis::message_or_fallback;

use crate::{AppError, AppResult, AppState};
use crate::extract::AppJson;
use crate::models::{check_zones, AlertFilter, CreateAlertRequest};

/// List alert history (newest first)
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<AlertFilter>,
) -> AppResult<Json<Vec<AlertLogEntry>>> {
    let history = state.history.read().await;
    let limit = filter.limit.unwrap_or(usize::MAX);
    Ok(Json(history.iter().take(limit).cloned().collect()))
}

/// Get single alert
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AlertLogEntry>> {
    let history = state.history.read().await;
    let entry = history
        .get(&AlertId::from(id))
        .cloned()
        .ok_or_else(|| AppError::NotFound("Alert not found".to_string()))?;

    Ok(Json(entry))
}

/// Build an alert from the submitted snapshot and log it
pub async fn create(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateAlertRequest>,
) -> AppResult<(StatusCode, Json<AlertLogEntry>)> {
    req.validate()?;
    check_zones(&req.readings)?;

    let threshold = state.config.effective_threshold(req.threshold);
    let audience = req.audience.unwrap_or(state.config.default_audience);
    let message = message_or_fallback(req.message.as_deref());

    let entry = build_alert_entry(&req.readings, threshold, audience, &message, Utc::now());

    // Persist before publishing so a failed write leaves history untouched.
    // The history write lock is held across the write to keep file order and
    // history order identical.
    let mut history = state.history.write().await;
    if let Some(store) = &state.store {
        let store = store.clone();
        let pending = entry.clone();
        tokio::task::spawn_blocking(move || store.lock().append(&pending))
            .await
            .map_err(|e| AppError::InternalError(format!("alert store task failed: {}", e)))??;
    }

    // Lock order: history, then snapshot
    let mut snapshot = state.last_snapshot.write().await;
    history.prepend(entry.clone());
    *snapshot = Some(req.readings);
    drop(snapshot);
    drop(history);

    tracing::info!(
        "Alert {} logged: {} for {}, {} sector(s) above {:.0}",
        entry.id(),
        entry.risk_level(),
        entry.audience(),
        entry.affected_zones().len(),
        threshold
    );

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Export bundle of the whole history plus the last submitted snapshot
pub async fn export(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let history = state.history.read().await;
    let snapshot = state.last_snapshot.read().await;

    let bundle = ExportBundle::new(&history, snapshot.as_deref(), Utc::now());
    Ok(Json(serde_json::to_value(&bundle)?))
}
