//! Eid timing endpoints.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use super::validate_record;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{ClearedResponse, MessageResponse, EID_REQUIRED_FIELDS};
use crate::AppState;

/// GET /get-eid-timings - Return the stored Eid record.
pub async fn get_eid_timings(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state
        .store
        .read_value(&state.config.eid_timings_path())
        .await
        .map_err(|e| e.context("Error reading Eid timings"))?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Eid timings not found".to_string()))
}

/// POST /update-eid-timings - Overwrite the Eid record.
pub async fn update_eid_timings(
    user: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<MessageResponse>, AppError> {
    let record = validate_record(body, EID_REQUIRED_FIELDS)?;
    let path = state.config.eid_timings_path();

    state
        .store
        .write(&path, &record)
        .await
        .map_err(|e| e.context("Error saving Eid timings"))?;

    tracing::info!(user = %user.username, file = %path.display(), "Eid timing saved");
    Ok(Json(MessageResponse::new(
        "Eid Namaz timing saved successfully",
    )))
}

/// POST /delete-eid-config - Clear the Eid record to an empty object.
pub async fn delete_eid_config(
    State(state): State<AppState>,
) -> Result<Json<ClearedResponse>, AppError> {
    let path = state.config.eid_timings_path();

    state
        .store
        .write(&path, &json!({}))
        .await
        .map_err(|e| e.context("Error clearing Eid timings"))?;

    tracing::info!(file = %path.display(), "Eid timing cleared");
    Ok(Json(ClearedResponse {
        status: "cleared".to_string(),
    }))
}
