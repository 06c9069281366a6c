//! Login and password endpoints.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::auth::{constant_time_compare, AuthUser};
use crate::errors::AppError;
use crate::models::{
    stored_password, ChangePasswordRequest, Credentials, LoginRequest, LoginResponse,
    MessageResponse,
};
use crate::AppState;

/// POST /login - Exchange a username/password pair for an access token.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let users: Credentials = state
        .store
        .read(&state.config.users_path())
        .await?
        .unwrap_or_else(|| {
            tracing::warn!(
                "Credential file {} not found",
                state.config.users_path().display()
            );
            Credentials::new()
        });

    // Unknown user and wrong password are indistinguishable to the caller
    let valid = stored_password(&users, &request.username)
        .is_some_and(|stored| constant_time_compare(stored, &request.password));

    if !valid {
        tracing::warn!(user = %request.username, "Login failed");
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let access_token = state.tokens.issue(&request.username)?;
    tracing::info!(user = %request.username, "Login successful");

    Ok(Json(LoginResponse { access_token }))
}

/// POST /change-password - Replace the caller's password.
pub async fn change_password(
    user: AuthUser,
    State(state): State<AppState>,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let username = user.username.clone();

    state
        .store
        .update(&state.config.users_path(), |current: Option<Credentials>| {
            let mut users = current.unwrap_or_default();
            let old_matches = stored_password(&users, &username)
                .is_some_and(|stored| constant_time_compare(stored, &request.old_password));

            let record = users
                .get_mut(&username)
                .and_then(Value::as_object_mut)
                .ok_or_else(|| AppError::Unauthorized("Unknown user".to_string()))?;

            if !old_matches {
                return Err(AppError::Forbidden("Old password is incorrect".to_string()));
            }

            record.insert("password".to_string(), Value::String(request.new_password));
            Ok(users)
        })
        .await
        .map_err(|e| {
            if let AppError::Forbidden(_) = e {
                tracing::warn!(user = %user.username, "Password change refused");
            }
            e.context("Error changing password")
        })?;

    tracing::info!(user = %user.username, "Password changed");
    Ok(Json(MessageResponse::new("Password changed successfully")))
}
