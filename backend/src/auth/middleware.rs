//! Authorization middleware
//!
//! Guards protected routes with the session token carried in the raw
//! `token` request header (no `Bearer` prefix).

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use job_board_shared::AuthError;

/// Header that carries the session token
pub const TOKEN_HEADER: &str = "token";

/// Authenticated caller, inserted into request extensions on success
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub email: String,
}

/// Verify the `token` header and return the caller it identifies
pub fn authorize(state: &AppState, headers: &HeaderMap) -> Result<AuthUser, AuthError> {
    let token = headers
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .ok_or(AuthError::MissingToken)?;

    let claims = state.jwt().verify(token)?;
    Ok(AuthUser {
        email: claims.email,
    })
}

/// Middleware that rejects requests without a valid session token
///
/// Apply with `axum::middleware::from_fn_with_state`. Handlers behind it can
/// take `Extension<AuthUser>`.
pub async fn require_token(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = authorize(&state, request.headers()).map_err(ApiError::Unauthorized)?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
