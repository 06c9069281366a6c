//! Bearer-token authentication.
//!
//! Tokens are issued and checked through the [`TokenVerifier`] trait; the shipped
//! implementation signs HS256 JWTs with a single shared secret. Password checks use
//! constant-time comparison to mitigate timing attacks.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::errors::AppError;
use crate::AppState;

/// JWT claims structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued to
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

/// Issues and verifies access tokens.
pub trait TokenVerifier: Send + Sync {
    /// Issue a token for `subject`.
    fn issue(&self, subject: &str) -> Result<String, AppError>;

    /// Verify a token and return its claims.
    fn verify(&self, token: &str) -> Result<Claims, AppError>;
}

/// HS256 JWT verifier backed by a shared secret.
pub struct JwtVerifier {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtVerifier {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }
}

impl TokenVerifier for JwtVerifier {
    fn issue(&self, subject: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now.checked_add_signed(self.ttl).ok_or_else(|| {
            tracing::error!(user = %subject, ttl = %self.ttl, "Token expiry out of range");
            AppError::Internal("Could not issue token".to_string())
        })?;
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp().max(0) as usize,
            exp: expires_at.timestamp().max(0) as usize,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, user = %subject, "JWT encoding failed");
            AppError::Internal("Could not issue token".to_string())
        })
    }

    fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::warn!(error = %e, "JWT validation failed");
                AppError::Unauthorized("Invalid or expired token".to_string())
            })
    }
}

/// Caller identity proven by a valid bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                tracing::warn!("Authentication failed: missing bearer token");
                AppError::Unauthorized("Missing Authorization Header".to_string())
            })?;

        let claims = state.tokens.verify(token)?;
        Ok(AuthUser {
            username: claims.sub,
        })
    }
}

/// Perform constant-time string comparison.
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    a_bytes.ct_eq(b_bytes).into()
}
