//! Authentication routes
//!
//! Provides endpoints for user registration and login.

use crate::error::{route_not_found, ApiResult};
use crate::extract::Body;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use job_board_shared::{LoginRequest, RegisterRequest, StatusResponse};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register).fallback(route_not_found))
        .route("/login", post(login).fallback(route_not_found))
}

/// Register a new user
///
/// POST /register
async fn register(
    State(state): State<AppState>,
    Body(req): Body<RegisterRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let response = UserService::register(state.users(), req).await?;
    Ok(Json(response))
}

/// Login with email and password
///
/// POST /login
async fn login(
    State(state): State<AppState>,
    Body(req): Body<LoginRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let response = UserService::login(state.users(), state.jwt(), req).await?;
    Ok(Json(response))
}
