//! Masjid Display Backend
//!
//! Login-gated admin API over the JSON files that drive a mosque's prayer-time display.

mod api;
mod auth;
mod config;
mod errors;
mod models;
mod store;
mod theme;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::{JwtVerifier, TokenVerifier};
use config::Config;
use store::JsonStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<JsonStore>,
    pub tokens: Arc<dyn TokenVerifier>,
}

impl AppState {
    /// Build state with the JWT verifier configured from `config`.
    pub fn new(config: Config) -> Self {
        let tokens = JwtVerifier::new(&config.jwt_secret, config.token_ttl);

        Self {
            config: Arc::new(config),
            store: Arc::new(JsonStore::new()),
            tokens: Arc::new(tokens),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Masjid Display Backend");
    tracing::info!("Config directory: {:?}", config.config_dir);
    tracing::info!("Credential file: {:?}", config.users_path());
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.uses_default_secret() {
        tracing::warn!("MASJID_JWT_SECRET is not set. Tokens are signed with the built-in default secret!");
    }

    let bind_addr = config.bind_addr;
    let app = create_router(AppState::new(config));

    // Start server
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let pages = Router::new()
        .route("/", get(api::login_page))
        .route("/home", get(api::home_page))
        .route("/updatetimings", get(api::time_settings_page))
        .route("/updateidetimings", get(api::eid_settings_page))
        .route("/updatepassword", get(api::update_password_page))
        .route("/updatetaraweeh", get(api::taraweeh_settings_page));

    let api_routes = Router::new()
        // Authentication
        .route("/login", post(api::login))
        .route("/change-password", post(api::change_password))
        // Prayer timings
        .route("/get-timings", get(api::get_timings))
        .route("/update-timings", post(api::update_timings))
        // Eid
        .route("/get-eid-timings", get(api::get_eid_timings))
        .route("/update-eid-timings", post(api::update_eid_timings))
        .route("/delete-eid-config", post(api::delete_eid_config))
        // Taraweeh
        .route("/get-taraweeh-timings", get(api::get_taraweeh_timings))
        .route("/update-taraweeh-timings", post(api::update_taraweeh_timings))
        // Themes
        .route("/theme.css", get(api::theme_css))
        .route("/save-theme/{name}", post(api::save_theme))
        .route("/set-theme/{name}", post(api::set_theme))
        .route("/themes", get(api::list_themes))
        // Misc
        .route("/get-mosque-details", get(api::get_mosque_details))
        .route("/log", post(api::log_from_client));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .merge(pages)
        .merge(api_routes)
        .merge(health_routes)
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
