//! Guide booking API

mod handler;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(handler::create))
        .route("/bookings/mine", get(handler::list_mine))
        .route("/bookings/available", get(handler::list_available))
        .route("/bookings/assigned", get(handler::list_assigned))
        .route("/bookings/{id}/accept", post(handler::accept))
        .route("/bookings/{id}/complete", post(handler::complete))
}
