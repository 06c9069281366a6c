//! Credential file and authentication request models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The credential file: username -> `{"password": ..., ...}`.
///
/// Kept untyped so one malformed entry cannot lock every other user out, and so rewrites
/// keep the file's key order. Passwords are stored in plain text to stay compatible with
/// existing `users.json` files.
pub type Credentials = Map<String, Value>;

/// Stored password for `username`, if the entry exists and holds a string password.
pub fn stored_password<'a>(users: &'a Credentials, username: &str) -> Option<&'a str> {
    users
        .get(username)
        .and_then(|record| record.get("password"))
        .and_then(Value::as_str)
}

/// Request body for POST /login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Response body for a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Request body for POST /change-password.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub old_password: String,
    pub new_password: String,
}

/// Plain `{"msg": ...}` acknowledgement used by most mutating routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
