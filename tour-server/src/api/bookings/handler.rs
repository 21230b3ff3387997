//! Guide booking handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::error::AppResult;
use shared::models::{Booking, BookingCreate, Role};

use crate::api::extract::{ApiJson, ApiPath};
use crate::auth::Principal;
use crate::state::AppState;

/// POST /bookings - traveler requests a guide
pub async fn create(
    State(state): State<AppState>,
    principal: Principal,
    ApiJson(payload): ApiJson<BookingCreate>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let traveler_id = principal.require(Role::Traveler)?;
    let booking = state.bookings.create_booking(traveler_id, &payload).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// POST /bookings/{id}/accept
pub async fn accept(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Booking>> {
    let guide_id = principal.require(Role::Guide)?;
    Ok(Json(state.bookings.accept_booking(guide_id, id).await?))
}

/// POST /bookings/{id}/complete
pub async fn complete(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Booking>> {
    let traveler_id = principal.require(Role::Traveler)?;
    Ok(Json(state.bookings.complete_booking(traveler_id, id).await?))
}

/// GET /bookings/mine
pub async fn list_mine(
    State(state): State<AppState>,
    principal: Principal,
) -> AppResult<Json<Vec<Booking>>> {
    let traveler_id = principal.require(Role::Traveler)?;
    Ok(Json(state.bookings.bookings_for_traveler(traveler_id).await?))
}

/// GET /bookings/available - PENDING bookings in the guide's location
pub async fn list_available(
    State(state): State<AppState>,
    principal: Principal,
) -> AppResult<Json<Vec<Booking>>> {
    let guide_id = principal.require(Role::Guide)?;
    Ok(Json(state.bookings.available_bookings_for_guide(guide_id).await?))
}

/// GET /bookings/assigned
pub async fn list_assigned(
    State(state): State<AppState>,
    principal: Principal,
) -> AppResult<Json<Vec<Booking>>> {
    let guide_id = principal.require(Role::Guide)?;
    Ok(Json(state.bookings.bookings_for_guide(guide_id).await?))
}
