//! Service-layer error for the thin directory handlers
//!
//! `ServiceError` lets repository calls propagate with `?` and turns into
//! an `AppError` at the boundary. Booking and settlement have their own
//! richer error enums.

use axum::response::{IntoResponse, Response};
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Logged, then reported as InternalError
    #[error("storage: {0}")]
    Db(#[from] sqlx::Error),
    #[error(transparent)]
    App(#[from] AppError),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::App(inner) => inner,
            ServiceError::Db(source) => {
                tracing::error!(error = %source, "Directory query failed");
                AppError::new(ErrorCode::InternalError)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
