//! HTTP API
//!
//! - [`health`] - liveness
//! - [`bookings`] - guide booking lifecycle
//! - [`payment`] - gateway orders
//! - [`guides`] - search and availability
//! - [`admin`] - guide verification
//! - [`packages`] - tour package bookings
//!
//! Every route except `/health` requires a bearer token; handlers check
//! the caller's role with [`Principal::require`](crate::auth::Principal::require).
//! Bodies, paths and queries go through [`extract`] so malformed input
//! is a 400 `VALIDATION_ERROR` like any other validation failure.

pub mod admin;
pub mod bookings;
pub mod extract;
pub mod guides;
pub mod health;
pub mod packages;
pub mod payment;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(bookings::router())
        .merge(payment::router())
        .merge(guides::router())
        .merge(admin::router())
        .merge(packages::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
