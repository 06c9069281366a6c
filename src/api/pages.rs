//! Admin HTML pages, served as-is from the pages directory.

use axum::{extract::State, response::Html};

use crate::errors::AppError;
use crate::AppState;

async fn serve_page(state: &AppState, file: &str) -> Result<Html<String>, AppError> {
    let path = state.config.pages_dir.join(file);
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Ok(Html(html)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("Page {} not found", path.display());
            Err(AppError::NotFound(format!("Page '{}' not found", file)))
        }
        Err(e) => Err(AppError::from(e).context("Error loading page")),
    }
}

/// GET /
pub async fn login_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    serve_page(&state, "login.html").await
}

/// GET /home
pub async fn home_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    serve_page(&state, "home.html").await
}

/// GET /updatetimings
pub async fn time_settings_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    serve_page(&state, "time-settings.html").await
}

/// GET /updateidetimings
pub async fn eid_settings_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    serve_page(&state, "eid-namaz.html").await
}

/// GET /updatepassword
pub async fn update_password_page(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    serve_page(&state, "update-password.html").await
}

/// GET /updatetaraweeh
pub async fn taraweeh_settings_page(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    serve_page(&state, "taraweeh-date.html").await
}
