//! Theme endpoints.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use super::require_object;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{ActiveTheme, MessageResponse, ThemeList, ThemeRegistry, DEFAULT_THEME};
use crate::theme::{render_css, EMPTY_ROOT_RULE};
use crate::AppState;

/// GET /theme.css - Render the active theme as CSS custom properties.
pub async fn theme_css(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let registry: Option<ThemeRegistry> = state.store.read(&state.config.themes_path()).await?;
    let pointer: Option<ActiveTheme> = state
        .store
        .read(&state.config.active_theme_path())
        .await?;

    let css = match (registry, pointer) {
        (Some(registry), Some(pointer)) => {
            let theme = registry.get(&pointer.active).and_then(Value::as_object);
            if theme.is_none() {
                tracing::debug!(theme = %pointer.active, "Active theme not in registry");
            }
            render_css(theme)
        }
        _ => EMPTY_ROOT_RULE.to_string(),
    };

    Ok(([(header::CONTENT_TYPE, "text/css")], css))
}

/// POST /save-theme/{name} - Insert or replace a theme's variables.
pub async fn save_theme(
    user: AuthUser,
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<MessageResponse>, AppError> {
    let variables = require_object(body, "Theme must be a JSON object")?;

    state
        .store
        .update(
            &state.config.themes_path(),
            |current: Option<ThemeRegistry>| {
                let mut registry = current.unwrap_or_default();
                registry.insert(name.clone(), Value::Object(variables));
                Ok(registry)
            },
        )
        .await
        .map_err(|e| e.context("Error saving theme"))?;

    tracing::info!(user = %user.username, theme = %name, "Theme saved");
    Ok(Json(MessageResponse::new(format!(
        "Theme '{}' saved successfully",
        name
    ))))
}

/// POST /set-theme/{name} - Point the display at a registered theme.
pub async fn set_theme(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let registry: Option<ThemeRegistry> = state.store.read(&state.config.themes_path()).await?;

    if !registry.is_some_and(|themes| themes.contains_key(&name)) {
        return Err(AppError::NotFound(format!(
            "Theme '{}' does not exist",
            name
        )));
    }

    state
        .store
        .write(
            &state.config.active_theme_path(),
            &ActiveTheme {
                active: name.clone(),
            },
        )
        .await
        .map_err(|e| e.context("Error setting active theme"))?;

    tracing::info!(theme = %name, "Active theme changed");
    Ok(Json(MessageResponse::new(format!(
        "Active theme set to '{}'",
        name
    ))))
}

/// GET /themes - List registered themes and the active one.
pub async fn list_themes(State(state): State<AppState>) -> Result<Json<ThemeList>, AppError> {
    let Some(registry) = state
        .store
        .read::<ThemeRegistry>(&state.config.themes_path())
        .await?
    else {
        return Ok(Json(ThemeList {
            active: None,
            available: Vec::new(),
        }));
    };

    let active = state
        .store
        .read::<ActiveTheme>(&state.config.active_theme_path())
        .await?
        .map(|pointer| pointer.active)
        .unwrap_or_else(|| DEFAULT_THEME.to_string());

    Ok(Json(ThemeList {
        active: Some(active),
        available: registry.keys().cloned().collect(),
    }))
}
