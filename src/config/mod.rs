//! Configuration module for the masjid display backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::{Duration, Utc};

/// Secret used when `MASJID_JWT_SECRET` is not set. Only suitable for local use.
pub const DEFAULT_JWT_SECRET: &str = "super-secret-key";

const TIMINGS_FILE: &str = "prayer-times.config.json";
const EID_TIMINGS_FILE: &str = "eid-timing.json";
const TARAWEEH_TIMINGS_FILE: &str = "taraweeh-timing.json";
const THEMES_FILE: &str = "themes.json";
const ACTIVE_THEME_FILE: &str = "active-theme.json";
const MOSQUE_FILE: &str = "mosque-detail.json";
const USERS_FILE: &str = "users.json";

const DEFAULT_TOKEN_TTL_MINUTES: i64 = 15;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Base directory; holds the credential file
    pub data_dir: PathBuf,
    /// Directory holding the per-entity JSON files
    pub config_dir: PathBuf,
    /// Directory holding the admin HTML pages
    pub pages_dir: PathBuf,
    /// Directory served under /static
    pub static_dir: PathBuf,
    /// Shared secret used to sign access tokens
    pub jwt_secret: String,
    /// Access token lifetime
    pub token_ttl: Duration,
}

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug)]
pub struct ConfigError {
    pub var: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.var, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("MASJID_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:5000".to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError {
                var: "MASJID_BIND_ADDR",
                message: e.to_string(),
            })?;

        let log_level = env::var("MASJID_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let data_dir: PathBuf = env::var("MASJID_DATA_DIR")
            .unwrap_or_else(|_| ".".to_string())
            .into();

        let config_dir = env::var("MASJID_CONFIG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("config"));

        let pages_dir = env::var("MASJID_PAGES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("templates"));

        let static_dir = env::var("MASJID_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("static"));

        let jwt_secret =
            env::var("MASJID_JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());

        let token_ttl = match env::var("MASJID_TOKEN_TTL_MINUTES") {
            Ok(raw) => parse_token_ttl(&raw)?,
            Err(_) => Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES),
        };

        Ok(Self {
            bind_addr,
            log_level,
            data_dir,
            config_dir,
            pages_dir,
            static_dir,
            jwt_secret,
            token_ttl,
        })
    }

    /// Build a configuration rooted at `data_dir` with default file layout.
    #[cfg(test)]
    pub fn with_data_dir(data_dir: &std::path::Path) -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            log_level: "info".to_string(),
            data_dir: data_dir.to_path_buf(),
            config_dir: data_dir.join("config"),
            pages_dir: data_dir.join("templates"),
            static_dir: data_dir.join("static"),
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            token_ttl: Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES),
        }
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(USERS_FILE)
    }

    pub fn timings_path(&self) -> PathBuf {
        self.config_dir.join(TIMINGS_FILE)
    }

    pub fn eid_timings_path(&self) -> PathBuf {
        self.config_dir.join(EID_TIMINGS_FILE)
    }

    pub fn taraweeh_timings_path(&self) -> PathBuf {
        self.config_dir.join(TARAWEEH_TIMINGS_FILE)
    }

    pub fn themes_path(&self) -> PathBuf {
        self.config_dir.join(THEMES_FILE)
    }

    pub fn active_theme_path(&self) -> PathBuf {
        self.config_dir.join(ACTIVE_THEME_FILE)
    }

    pub fn mosque_path(&self) -> PathBuf {
        self.config_dir.join(MOSQUE_FILE)
    }

    /// Whether the signing secret is still the built-in default.
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

/// Parse a token lifetime in minutes.
///
/// The lifetime must be positive, and expiry timestamps computed from it must stay within
/// the representable date range.
fn parse_token_ttl(raw: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason: &str| ConfigError {
        var: "MASJID_TOKEN_TTL_MINUTES",
        message: format!("{}, got {:?}", reason, raw),
    };

    let minutes = raw
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|minutes| *minutes > 0)
        .ok_or_else(|| invalid("expected a positive integer"))?;

    Duration::try_minutes(minutes)
        .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
        .ok_or_else(|| invalid("lifetime is too large"))
}
