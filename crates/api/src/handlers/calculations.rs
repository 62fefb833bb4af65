//! Handlers for calculation history.
//!
//! Responses are the bare JSON records (no envelope): an array for the
//! listing, a record or `null` for the latest, and the created record for
//! a POST.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sleepwise_core::error::CoreError;
use sleepwise_core::validation::validate_new_calculation;
use sleepwise_db::repositories::calculation_repo::RECENT_HISTORY_LIMIT;
use sleepwise_db::repositories::CalculationRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/calculations
///
/// Up to ten most recent records, newest first.
pub async fn list_calculations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = CalculationRepo::list_recent(&state.pool, RECENT_HISTORY_LIMIT).await?;

    Ok(Json(records))
}

/// GET /api/calculations/latest
///
/// The most recent record, or `null` when the history is empty.
pub async fn latest_calculation(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let latest = CalculationRepo::latest(&state.pool).await?;

    Ok(Json(latest))
}

/// POST /api/calculations
///
/// Validate the body and append a history record. Returns 201 with the
/// stored record, or 400 with `{message, field}` for the first schema
/// failure.
pub async fn create_calculation(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let input = validate_new_calculation(&body).map_err(CoreError::from)?;

    let record = CalculationRepo::append(&state.pool, &input).await?;

    tracing::info!(
        calculation_id = record.id,
        mode = %record.mode,
        target_time = %record.target_time,
        "Calculation recorded",
    );

    Ok((StatusCode::CREATED, Json(record)))
}
