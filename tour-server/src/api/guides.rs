//! Guide search and availability API

use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use chrono::NaiveDate;
use serde::Deserialize;
use shared::error::AppResult;
use shared::models::{Availability, AvailabilityRange, AvailabilityUpsert, GuideSearchResult, Role};

use super::extract::{ApiJson, ApiQuery};
use crate::auth::Principal;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/guides/search", get(search))
        .route("/guide/availability", get(get_availability).post(set_availability))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub date: NaiveDate,
    pub location: String,
    #[serde(default)]
    pub language: String,
}

/// GET /guides/search?date&location&language - any authenticated role
async fn search(
    State(state): State<AppState>,
    _principal: Principal,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> AppResult<Json<Vec<GuideSearchResult>>> {
    let results = state
        .guides
        .search(query.date, &query.location, &query.language)
        .await?;
    Ok(Json(results))
}

/// POST /guide/availability
async fn set_availability(
    State(state): State<AppState>,
    principal: Principal,
    ApiJson(payload): ApiJson<AvailabilityUpsert>,
) -> AppResult<Json<Availability>> {
    let guide_id = principal.require(Role::Guide)?;
    Ok(Json(state.guides.set_availability(guide_id, &payload).await?))
}

/// GET /guide/availability?start_date&end_date
async fn get_availability(
    State(state): State<AppState>,
    principal: Principal,
    ApiQuery(range): ApiQuery<AvailabilityRange>,
) -> AppResult<Json<Vec<Availability>>> {
    let guide_id = principal.require(Role::Guide)?;
    let records = state
        .guides
        .availability_range(guide_id, range.start_date, range.end_date)
        .await?;
    Ok(Json(records))
}
