//! Taraweeh timing endpoints.

use axum::{extract::State, Json};
use serde_json::Value;

use super::validate_record;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{MessageResponse, TARAWEEH_REQUIRED_FIELDS};
use crate::AppState;

/// GET /get-taraweeh-timings - Return the stored Taraweeh record.
pub async fn get_taraweeh_timings(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    state
        .store
        .read_value(&state.config.taraweeh_timings_path())
        .await
        .map_err(|e| e.context("Error reading Taraweeh timings"))?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Taraweeh timings not found".to_string()))
}

/// POST /update-taraweeh-timings - Overwrite the Taraweeh record.
pub async fn update_taraweeh_timings(
    user: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<MessageResponse>, AppError> {
    let record = validate_record(body, TARAWEEH_REQUIRED_FIELDS)?;
    let path = state.config.taraweeh_timings_path();

    state
        .store
        .write(&path, &record)
        .await
        .map_err(|e| e.context("Error saving Taraweeh timings"))?;

    tracing::info!(user = %user.username, file = %path.display(), "Taraweeh timing saved");
    Ok(Json(MessageResponse::new(
        "Taraweeh Namaz timing saved successfully",
    )))
}
