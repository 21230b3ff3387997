//! Kind to HTTP status

use super::kind::ErrorKind;
use http::StatusCode;

impl ErrorKind {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Provider => StatusCode::BAD_GATEWAY,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn status_of(code: ErrorCode) -> Option<StatusCode> {
        code.kind().map(|k| k.http_status())
    }

    #[test]
    fn test_lifecycle_codes_map_to_expected_statuses() {
        let table = [
            (ErrorCode::BookingNotFound, StatusCode::NOT_FOUND),
            (ErrorCode::GuideNotFound, StatusCode::NOT_FOUND),
            (ErrorCode::BookingNotPending, StatusCode::CONFLICT),
            (ErrorCode::BookingAlreadyPaid, StatusCode::CONFLICT),
            (ErrorCode::BookingLocationMismatch, StatusCode::FORBIDDEN),
            (ErrorCode::TokenExpired, StatusCode::UNAUTHORIZED),
            (ErrorCode::InvalidTourHours, StatusCode::BAD_REQUEST),
            (ErrorCode::PaymentProviderError, StatusCode::BAD_GATEWAY),
            (ErrorCode::DatabaseError, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (code, status) in table {
            assert_eq!(status_of(code), Some(status), "{code:?}");
        }
    }

    #[test]
    fn test_success_has_no_status() {
        assert_eq!(status_of(ErrorCode::Success), None);
    }
}
