//! Bearer-token extractor for [`Principal`]

use axum::{extract::FromRequestParts, http::request::Parts};
use shared::error::AppError;

use super::{JwtError, JwtService, Principal};
use crate::state::AppState;

impl FromRequestParts<AppState> for Principal {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if let Some(principal) = parts.extensions.get::<Principal>() {
            return Ok(*principal);
        }

        let header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());
        let token = match header {
            Some(h) => JwtService::extract_from_header(h)
                .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
            None => {
                tracing::debug!(uri = %parts.uri, "Request without bearer token");
                return Err(AppError::not_authenticated());
            }
        };

        let claims = state.jwt.validate_token(token).map_err(|e| {
            tracing::warn!(error = %e, uri = %parts.uri, "Token rejected");
            match e {
                JwtError::ExpiredToken => AppError::token_expired(),
                _ => AppError::invalid_token("Invalid token"),
            }
        })?;
        let principal = Principal::try_from(claims)
            .map_err(|e| AppError::invalid_token(format!("Malformed token subject: {e}")))?;

        parts.extensions.insert(principal);
        Ok(principal)
    }
}
