//! Payment order API

use axum::{
    Json, Router,
    extract::State,
    routing::post,
};
use shared::error::AppResult;
use shared::models::{PaymentOrder, Role};

use super::extract::ApiPath;
use crate::auth::Principal;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/payment/order/{booking_id}", post(create_booking_order))
        .route("/payment/order/package/{id}", post(create_package_order))
}

/// POST /payment/order/{booking_id}
async fn create_booking_order(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(booking_id): ApiPath<i64>,
) -> AppResult<Json<PaymentOrder>> {
    let traveler_id = principal.require(Role::Traveler)?;
    let order = state
        .settlement
        .create_order_for_booking(booking_id, traveler_id)
        .await?;
    Ok(Json(order))
}

/// POST /payment/order/package/{id}
async fn create_package_order(
    State(state): State<AppState>,
    principal: Principal,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<PaymentOrder>> {
    let traveler_id = principal.require(Role::Traveler)?;
    let order = state
        .settlement
        .create_order_for_package_booking(id, traveler_id)
        .await?;
    Ok(Json(order))
}
