//! Eid and Taraweeh timing records.
//!
//! Both records are stored exactly as the client sent them, so they are kept as JSON
//! objects and only checked for the keys the display pages rely on.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys an Eid timing record must contain.
pub const EID_REQUIRED_FIELDS: &[&str] = &["namaz", "datetime"];

/// Keys a Taraweeh timing record must contain.
pub const TARAWEEH_REQUIRED_FIELDS: &[&str] =
    &["taraweeh_start_date", "taraweeh_end_date", "taraweeh_time"];

/// Return the required keys absent from `record`, in declaration order.
pub fn missing_fields<'a>(record: &Map<String, Value>, required: &[&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .copied()
        .filter(|key| !record.contains_key(*key))
        .collect()
}

/// Response body for POST /delete-eid-config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearedResponse {
    pub status: String,
}
