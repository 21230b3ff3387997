//! Tour package booking API

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use shared::error::AppResult;
use shared::models::{PackageBooking, PackageBookingCreate, Role};

use super::extract::ApiJson;
use crate::auth::Principal;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/package-bookings", post(create))
        .route("/package-bookings/mine", get(list_mine))
}

async fn create(
    State(state): State<AppState>,
    principal: Principal,
    ApiJson(payload): ApiJson<PackageBookingCreate>,
) -> AppResult<(StatusCode, Json<PackageBooking>)> {
    let traveler_id = principal.require(Role::Traveler)?;
    let booking = state
        .packages
        .create_package_booking(traveler_id, &payload)
        .await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

async fn list_mine(
    State(state): State<AppState>,
    principal: Principal,
) -> AppResult<Json<Vec<PackageBooking>>> {
    let traveler_id = principal.require(Role::Traveler)?;
    Ok(Json(state.packages.bookings_for_traveler(traveler_id).await?))
}
