//! Axum route handlers for the Plan API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::plan::generator::{generate_plan, Stage};
use crate::plan::models::PrepPlan;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanRequest {
    pub job_description: Option<String>,
}

/// Success envelope. Failures use the `{ "error": ... }` shape from `AppError`.
#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratePlanResponse {
    pub success: bool,
    pub plan: PrepPlan,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/generate-prep-plan
///
/// Turns a raw job description into a `PrepPlan` with one model call.
pub async fn handle_generate_plan(
    State(state): State<AppState>,
    payload: Result<Json<GeneratePlanRequest>, JsonRejection>,
) -> Result<Json<GeneratePlanResponse>, AppError> {
    let span = info_span!("generate_prep_plan", request_id = %Uuid::new_v4());

    let plan = async move {
        let Json(request) = payload.map_err(|e| {
            info!(stage = %Stage::Received, "Received prep plan request");
            warn!(stage = %Stage::Rejected, "Unreadable request body: {}", e.body_text());
            AppError::Validation(format!("Invalid request body: {}", e.body_text()))
        })?;

        generate_plan(
            state.llm.as_ref(),
            state.parser.as_ref(),
            request.job_description.as_deref(),
        )
        .await
    }
    .instrument(span)
    .await?;

    Ok(Json(GeneratePlanResponse {
        success: true,
        plan,
    }))
}
