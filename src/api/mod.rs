//! HTTP route handlers.
//!
//! Each handler reads its backing JSON file fresh through the shared [`crate::store::JsonStore`].

mod auth;
mod eid;
mod mosque;
mod pages;
mod taraweeh;
mod themes;
mod timings;

pub use auth::*;
pub use eid::*;
pub use mosque::*;
pub use pages::*;
pub use taraweeh::*;
pub use themes::*;
pub use timings::*;

use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::models::missing_fields;

/// Unwrap a request body that must be a JSON object.
fn require_object(body: Value, message: &str) -> Result<Map<String, Value>, AppError> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}

/// Check that a timing record is an object carrying every required key.
fn validate_record(body: Value, required: &[&str]) -> Result<Map<String, Value>, AppError> {
    let record = require_object(body, "Invalid data")?;
    let missing = missing_fields(&record, required);
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Invalid data: missing {}",
            missing.join(", ")
        )));
    }
    Ok(record)
}
