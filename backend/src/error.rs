//! Application error handling
//!
//! This module converts handler failures into the response bodies clients
//! expect. Most failures are body-level outcomes sent with HTTP 200; only
//! validation failures and unmatched routes use an error status.

use crate::repositories::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use job_board_shared::{
    messages, AuthError, CastError, ErrorDetail, ErrorResponse, FieldError, StatusResponse,
    ValidationErrorResponse,
};
use thiserror::Error;
use tracing::{debug, error};

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing required fields, reported per field
    #[error("Validation error: {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Missing, invalid or expired session token
    #[error("Unauthorized: {0}")]
    Unauthorized(AuthError),

    /// Business-rule failure such as a duplicate email
    #[error("Request failed: {0}")]
    Failed(&'static str),

    #[error(transparent)]
    Input(#[from] CastError),

    /// Body that could not be decoded as JSON or a urlencoded form
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ValidationErrorResponse { errors })).into_response()
            }
            ApiError::Unauthorized(cause) => {
                // The cause stays in the logs; clients get the generic body
                debug!(%cause, "Rejected unauthorized request");
                Json(StatusResponse::failed(messages::UNAUTHORIZED)).into_response()
            }
            ApiError::Failed(message) => Json(StatusResponse::failed(message)).into_response(),
            ApiError::Input(err) => echo_error(err.to_string()),
            ApiError::MalformedBody(detail) => {
                debug!(%detail, "Rejected request body");
                echo_error(detail)
            }
            ApiError::Store(err) => {
                error!("Store error: {:?}", err);
                echo_error(err.to_string())
            }
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                echo_error(err.to_string())
            }
        }
    }
}

/// Data-layer failures are echoed to the client inside the error envelope
fn echo_error(message: String) -> Response {
    Json(ErrorResponse {
        error: ErrorDetail {
            status: None,
            message,
        },
    })
    .into_response()
}

/// Response for requests that matched no route
pub async fn route_not_found() -> Response {
    let status = StatusCode::NOT_FOUND;
    let body = Json(ErrorResponse {
        error: ErrorDetail {
            status: Some(status.as_u16()),
            message: messages::ROUTE_NOT_FOUND.to_string(),
        },
    });
    (status, body).into_response()
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
