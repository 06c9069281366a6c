//! Prayer-timing endpoints.

use axum::{extract::State, Json};
use serde_json::{Map, Value};

use super::require_object;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::MessageResponse;
use crate::AppState;

/// GET /get-timings - Return the prayer-timing config verbatim.
pub async fn get_timings(
    _user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    state
        .store
        .read_value(&state.config.timings_path())
        .await
        .map_err(|e| e.context("Error reading timings"))?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Config file not found.".to_string()))
}

/// POST /update-timings - Shallow-merge the body's top-level keys into the config.
pub async fn update_timings(
    user: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<MessageResponse>, AppError> {
    let updates = require_object(body, "Timing updates must be a JSON object")?;
    let path = state.config.timings_path();

    state
        .store
        .update(&path, |current: Option<Map<String, Value>>| {
            let mut config =
                current.ok_or_else(|| AppError::NotFound("Config file not found.".to_string()))?;
            config.extend(updates);
            Ok(config)
        })
        .await
        .map_err(|e| e.context("Error updating timings"))?;

    tracing::info!(user = %user.username, file = %path.display(), "Prayer timings updated");
    Ok(Json(MessageResponse::new(
        "Prayer timings updated successfully.",
    )))
}
