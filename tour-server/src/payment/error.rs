use shared::error::{AppError, ErrorCode, ErrorKind};
use thiserror::Error;

use super::gateway::GatewayError;

/// Payment settlement errors
#[derive(Debug, Error)]
pub enum SettlementError {
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Booking not found: {0}")]
    BookingNotFound(i64),

    #[error("Package booking not found: {0}")]
    PackageBookingNotFound(i64),

    #[error("You are not authorized to pay for this booking")]
    NotOwner { booking_id: i64, traveler_id: i64 },

    #[error("Payment can only be made for completed bookings")]
    NotPayable { booking_id: i64, status: String },

    #[error("This booking has already been paid for")]
    AlreadyPaid(i64),

    #[error("Package booking is already confirmed")]
    PackageAlreadyConfirmed(i64),

    #[error("Amount out of range")]
    AmountOutOfRange,

    #[error("Payment provider error: {0}")]
    Provider(#[from] GatewayError),
}

impl SettlementError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Storage(_) => ErrorCode::InternalError,
            Self::BookingNotFound(_) => ErrorCode::BookingNotFound,
            Self::PackageBookingNotFound(_) => ErrorCode::PackageBookingNotFound,
            Self::NotOwner { .. } => ErrorCode::NotBookingOwner,
            Self::NotPayable { .. } => ErrorCode::BookingNotPayable,
            Self::AlreadyPaid(_) => ErrorCode::BookingAlreadyPaid,
            Self::PackageAlreadyConfirmed(_) => ErrorCode::PackageBookingAlreadyConfirmed,
            Self::AmountOutOfRange => ErrorCode::ValueOutOfRange,
            Self::Provider(_) => ErrorCode::PaymentProviderError,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.code().kind().unwrap_or(ErrorKind::Internal)
    }
}

impl From<SettlementError> for AppError {
    fn from(err: SettlementError) -> Self {
        let code = err.code();
        match err {
            SettlementError::Storage(e) => {
                tracing::error!(error = %e, "Settlement storage error");
                AppError::new(code)
            }
            // Gateway bodies may echo credentials or internals; log them, don't return them
            SettlementError::Provider(e) => {
                tracing::error!(error = %e, "Payment gateway call failed");
                AppError::new(code)
            }
            SettlementError::BookingNotFound(id)
            | SettlementError::PackageBookingNotFound(id)
            | SettlementError::AlreadyPaid(id)
            | SettlementError::PackageAlreadyConfirmed(id) => {
                AppError::with_message(code, err.to_string()).with_detail("booking_id", id)
            }
            SettlementError::NotOwner { booking_id, .. } => {
                AppError::with_message(code, err.to_string()).with_detail("booking_id", booking_id)
            }
            SettlementError::NotPayable {
                booking_id,
                ref status,
            } => AppError::with_message(code, err.to_string())
                .with_detail("booking_id", booking_id)
                .with_detail("status", status.as_str()),
            SettlementError::AmountOutOfRange => AppError::with_message(code, err.to_string()),
        }
    }
}

pub type SettlementResult<T> = Result<T, SettlementError>;
