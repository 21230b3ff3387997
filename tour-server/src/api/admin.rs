//! Admin API: guide verification

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use shared::error::AppResult;
use shared::models::{GuideSummary, GuideVerification, Role};

use super::extract::{ApiJson, ApiPath};
use crate::auth::Principal;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/guides/pending", get(list_pending))
        .route("/admin/guides/{id}/verification", post(verify))
}

async fn list_pending(
    State(state): State<AppState>,
    principal: Principal,
) -> AppResult<Json<Vec<GuideSummary>>> {
    principal.require(Role::Admin)?;
    Ok(Json(state.guides.list_pending().await?))
}

async fn verify(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<GuideVerification>,
) -> AppResult<Json<GuideSummary>> {
    let admin_id = principal.require(Role::Admin)?;
    let guide = state.guides.verify(id, payload.status()).await?;
    tracing::info!(admin_id, guide_id = id, approve = payload.approve, "Guide verified by admin");
    Ok(Json(guide))
}
