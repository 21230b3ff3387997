//! [`AppError`] and the JSON body it renders to

use super::codes::ErrorCode;
use super::kind::ErrorKind;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

pub type Details = HashMap<String, Value>;

/// A coded failure crossing a service or HTTP boundary.
///
/// `code` decides the kind and the status; `message` is what the client
/// reads; `details` carries machine-readable context such as ids.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<Details>,
}

impl AppError {
    /// Error carrying the code's stock message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let details = self.details.get_or_insert_with(Details::new);
        details.insert(key.into(), value.into());
        self
    }

    /// `Success` is not a failure; wrapping it anyway reads as `Internal`
    pub fn kind(&self) -> ErrorKind {
        self.code.kind().unwrap_or(ErrorKind::Internal)
    }

    pub fn http_status(&self) -> StatusCode {
        self.kind().http_status()
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    pub fn not_authenticated() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::TokenInvalid, msg)
    }

    pub fn token_expired() -> Self {
        Self::new(ErrorCode::TokenExpired)
    }

    pub fn role_required(role: impl Into<String>) -> Self {
        let role = role.into();
        let message = format!("This action requires the {role} role");
        Self::with_message(ErrorCode::RoleRequired, message).with_detail("required_role", role)
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Wire shape of every failed request:
/// `{"code": 3001, "kind": "NOT_FOUND", "message": "...", "details": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub kind: ErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        ErrorBody {
            code: err.code.code(),
            kind: err.kind(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.http_status();
        let body = match self.kind() {
            // full text goes to the log, the client only sees the stock message
            ErrorKind::Internal => {
                tracing::error!(
                    code = %self.code,
                    category = self.code.category().name(),
                    detail = %self.message,
                    "Request failed with internal error"
                );
                ErrorBody::from(&AppError::new(self.code))
            }
            _ => ErrorBody::from(&self),
        };
        (status, axum::Json(body)).into_response()
    }
}
