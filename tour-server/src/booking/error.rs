use shared::error::{AppError, ErrorCode, ErrorKind};
use shared::models::BookingStatus;
use thiserror::Error;

/// Booking lifecycle errors
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Traveler not found: {0}")]
    TravelerNotFound(i64),

    #[error("Guide not found: {0}")]
    GuideNotFound(i64),

    #[error("Booking not found: {0}")]
    BookingNotFound(i64),

    #[error("Guide {0} is not approved to accept bookings")]
    GuideNotApproved(i64),

    #[error("This booking has already been accepted or is no longer pending")]
    NotPending { booking_id: i64, status: BookingStatus },

    #[error("This booking is not in your location")]
    LocationMismatch {
        booking_id: i64,
        booking_location: String,
        guide_location: String,
    },

    #[error("You are not authorized to complete this booking")]
    NotOwner { booking_id: i64, traveler_id: i64 },

    #[error("Only confirmed bookings can be marked as completed")]
    NotConfirmed { booking_id: i64, status: BookingStatus },

    #[error("Tour date must be in the future")]
    TourDateNotInFuture,

    #[error("Tour must be at least 1 hour long, got {0}")]
    InvalidHours(i32),

    #[error("Location is required")]
    BlankLocation,

    #[error("Amount out of range")]
    AmountOutOfRange,
}

impl BookingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Storage(_) => ErrorCode::InternalError,
            Self::TravelerNotFound(_) => ErrorCode::TravelerNotFound,
            Self::GuideNotFound(_) => ErrorCode::GuideNotFound,
            Self::BookingNotFound(_) => ErrorCode::BookingNotFound,
            Self::GuideNotApproved(_) => ErrorCode::GuideNotApproved,
            Self::NotPending { .. } => ErrorCode::BookingNotPending,
            Self::LocationMismatch { .. } => ErrorCode::BookingLocationMismatch,
            Self::NotOwner { .. } => ErrorCode::NotBookingOwner,
            Self::NotConfirmed { .. } => ErrorCode::BookingNotConfirmed,
            Self::TourDateNotInFuture => ErrorCode::TourDateNotInFuture,
            Self::InvalidHours(_) => ErrorCode::InvalidTourHours,
            Self::BlankLocation => ErrorCode::RequiredField,
            Self::AmountOutOfRange => ErrorCode::ValueOutOfRange,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.code().kind().unwrap_or(ErrorKind::Internal)
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        let code = err.code();
        match err {
            BookingError::Storage(e) => {
                tracing::error!(error = %e, "Booking storage error");
                AppError::new(code)
            }
            BookingError::TravelerNotFound(id) | BookingError::GuideNotFound(id) => {
                AppError::with_message(code, err.to_string()).with_detail("user_id", id)
            }
            BookingError::BookingNotFound(id) | BookingError::GuideNotApproved(id) => {
                AppError::with_message(code, err.to_string()).with_detail("id", id)
            }
            BookingError::NotPending { booking_id, status }
            | BookingError::NotConfirmed { booking_id, status } => {
                AppError::with_message(code, err.to_string())
                    .with_detail("booking_id", booking_id)
                    .with_detail("status", status.as_str())
            }
            BookingError::LocationMismatch {
                booking_id,
                ref booking_location,
                ref guide_location,
            } => AppError::with_message(code, err.to_string())
                .with_detail("booking_id", booking_id)
                .with_detail("booking_location", booking_location.as_str())
                .with_detail("guide_location", guide_location.as_str()),
            BookingError::NotOwner { booking_id, .. } => {
                AppError::with_message(code, err.to_string()).with_detail("booking_id", booking_id)
            }
            BookingError::BlankLocation => {
                AppError::with_message(code, err.to_string()).with_detail("field", "location")
            }
            BookingError::TourDateNotInFuture
            | BookingError::InvalidHours(_)
            | BookingError::AmountOutOfRange => AppError::with_message(code, err.to_string()),
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_kinds_match_failure_modes() {
        assert_eq!(BookingError::GuideNotFound(1).kind(), ErrorKind::NotFound);
        assert_eq!(BookingError::BookingNotFound(1).kind(), ErrorKind::NotFound);
        assert_eq!(
            BookingError::NotPending {
                booking_id: 1,
                status: BookingStatus::Confirmed
            }
            .kind(),
            ErrorKind::Conflict
        );
        assert_eq!(
            BookingError::NotOwner {
                booking_id: 1,
                traveler_id: 2
            }
            .kind(),
            ErrorKind::Forbidden
        );
        assert_eq!(BookingError::InvalidHours(0).kind(), ErrorKind::Validation);
        assert_eq!(
            BookingError::Storage(sqlx::Error::PoolTimedOut).kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn test_storage_error_does_not_leak_detail() {
        let err: AppError = BookingError::Storage(sqlx::Error::PoolTimedOut).into();
        assert_eq!(err.code, ErrorCode::InternalError);
        assert_eq!(err.message, "Internal server error");
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_location_mismatch_carries_both_locations() {
        let err: AppError = BookingError::LocationMismatch {
            booking_id: 5,
            booking_location: "Pune".into(),
            guide_location: "Goa".into(),
        }
        .into();
        assert_eq!(err.http_status(), StatusCode::FORBIDDEN);
        let details = err.details.unwrap();
        assert_eq!(details["booking_location"], "Pune");
        assert_eq!(details["guide_location"], "Goa");
    }
}
