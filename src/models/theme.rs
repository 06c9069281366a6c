//! Theme registry and active-theme pointer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name used when the pointer file has no `active` key.
pub const DEFAULT_THEME: &str = "default";

/// CSS variable name -> value.
pub type Theme = Map<String, Value>;

/// Theme name -> variables. Insertion order is kept.
pub type ThemeRegistry = Map<String, Value>;

/// Content of the active-theme pointer file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveTheme {
    #[serde(default = "default_theme_name")]
    pub active: String,
}

fn default_theme_name() -> String {
    DEFAULT_THEME.to_string()
}

/// Response body for GET /themes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeList {
    pub active: Option<String>,
    pub available: Vec<String>,
}
