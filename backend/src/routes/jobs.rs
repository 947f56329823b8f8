//! Job posting routes

use crate::auth::{require_token, AuthUser};
use crate::error::{route_not_found, ApiResult};
use crate::extract::Body;
use crate::services::JobService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post, put},
    Extension, Json, Router,
};
use job_board_shared::{JobPostingRequest, StatusResponse};
use tracing::debug;

/// Create job routes
///
/// Only submission sits behind the token check; update and search are open.
/// A known path hit with another method falls through to the 404 envelope.
pub fn job_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/addjob",
            post(add_job)
                .route_layer(middleware::from_fn_with_state(state, require_token))
                .fallback(route_not_found),
        )
        .route("/addjob/:id", put(update_job).fallback(route_not_found))
        .route("/jobs/:skills", get(search_jobs).fallback(route_not_found))
}

/// POST /api/addjob - Submit a job posting (token required)
async fn add_job(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Body(req): Body<JobPostingRequest>,
) -> ApiResult<Json<StatusResponse>> {
    debug!(email = %user.email, "Job submission");
    let response = JobService::submit(state.jobs(), req).await?;
    Ok(Json(response))
}

/// PUT /api/addjob/:id - Update a job posting by identifier
async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Body(req): Body<JobPostingRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let response = JobService::update(state.jobs(), &id, req).await?;
    Ok(Json(response))
}

/// GET /api/jobs/:skills - Postings matching any comma-separated skill
async fn search_jobs(
    State(state): State<AppState>,
    Path(skills): Path<String>,
) -> ApiResult<Json<StatusResponse>> {
    let response = JobService::search(state.jobs(), &skills).await?;
    Ok(Json(response))
}
