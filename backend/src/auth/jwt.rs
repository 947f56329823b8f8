//! Session token generation and validation
//!
//! Tokens are HS256 JWTs carrying the user's email. Keys are derived from
//! the configured secret once and shared behind `Arc`.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use job_board_shared::AuthError;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// JWT claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated email
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Pre-computed JWT keys for efficient token operations
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// JWT service for session tokens
///
/// Cheap to clone; create once at startup and keep it in `AppState`.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    validation: Validation,
    expiry_secs: i64,
}

impl JwtService {
    pub fn new(secret: &str, expiry_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // The expiry window is exact; no clock-skew allowance
        validation.leeway = 0;

        Self {
            keys: JwtKeys::new(secret),
            validation,
            expiry_secs,
        }
    }

    /// Issue a session token for an email, valid for the configured window
    #[inline]
    pub fn issue(&self, email: &str) -> Result<String> {
        self.issue_at(email, Utc::now())
    }

    /// Issue a token as if it had been created at `issued_at`
    pub fn issue_at(&self, email: &str, issued_at: DateTime<Utc>) -> Result<String> {
        let exp = issued_at + Duration::seconds(self.expiry_secs);

        let claims = Claims {
            email: email.to_string(),
            iat: issued_at.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to generate session token: {}", e))
    }

    /// Check signature and expiry, returning the embedded claims
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, self.keys.decoding(), &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            })
    }

    /// Token lifetime in seconds
    #[inline]
    pub fn expiry_secs(&self) -> i64 {
        self.expiry_secs
    }
}
