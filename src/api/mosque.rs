//! Mosque details and the client log sink.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::errors::AppError;
use crate::AppState;

/// GET /get-mosque-details - Return the mosque details file verbatim.
pub async fn get_mosque_details(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state
        .store
        .read_value(&state.config.mosque_path())
        .await
        .map_err(|e| e.context("Error reading mosque details"))?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Mosque details not found".to_string()))
}

/// POST /log - Relay a browser-side message into the server log.
pub async fn log_from_client(Json(payload): Json<Value>) -> StatusCode {
    match payload.get("message") {
        Some(Value::String(message)) => tracing::info!(target: "client", "{}", message),
        Some(other) => tracing::info!(target: "client", "{}", other),
        None => tracing::info!(target: "client", "(no message)"),
    }
    StatusCode::NO_CONTENT
}
