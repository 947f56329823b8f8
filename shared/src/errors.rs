//! Error types for the Job Board application

use thiserror::Error;

/// Authentication error types
///
/// The detail is for logs only. Clients always receive the same generic
/// failure body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing token")]
    MissingToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

/// Errors raised while turning loosely typed request input into stored values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CastError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("Cast to Number failed for value \"{value}\" at path \"{path}\"")]
    Number { path: &'static str, value: String },

    #[error("Cast to Uuid failed for value \"{0}\" at path \"_id\"")]
    Identifier(String),
}
