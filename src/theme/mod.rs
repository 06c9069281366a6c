//! CSS rendering for display themes.

use serde_json::Value;

use crate::models::Theme;

/// Rule emitted when no theme is configured at all.
pub const EMPTY_ROOT_RULE: &str = ":root {}";

/// Render a theme as CSS custom properties under `:root`.
///
/// A missing theme renders as an empty block.
pub fn render_css(theme: Option<&Theme>) -> String {
    let declarations: Vec<String> = theme
        .map(|vars| {
            vars.iter()
                .map(|(name, value)| format!("  --{}: {};", name, css_value(value)))
                .collect()
        })
        .unwrap_or_default();

    format!(":root {{\n{}\n}}", declarations.join("\n"))
}

fn css_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
