//! Prompt rendering handler

use axum::{extract::State, Json};
use validator::Validate;

use sentinel_core::logic::analysis::render_prompt;
use sentinel_core::logic::telemetry::summarize;

use crate::{AppResult, AppState};
use crate::extract::AppJson;
use crate::models::{check_zones, PromptRequest, PromptResponse};

pub async fn render(
    State(state): State<AppState>,
    AppJson(req): AppJson<PromptRequest>,
) -> AppResult<Json<PromptResponse>> {
    req.validate()?;
    check_zones(&req.readings)?;

    let threshold = state.config.effective_threshold(req.threshold);
    let summary = summarize(&req.readings, threshold);

    tracing::debug!("Rendering {} prompt for {} sector(s)", req.context, summary.total);

    Ok(Json(PromptResponse {
        context: req.context,
        prompt: render_prompt(req.context, &summary, threshold),
    }))
}
