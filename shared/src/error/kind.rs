//! Stable error kinds surfaced to API callers

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Coarse failure taxonomy shared by every domain error
///
/// Codes give the precise reason; the kind decides the response status
/// and whether the failure is the caller's fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Referenced entity is absent
    NotFound,
    /// State-machine precondition violated
    Conflict,
    /// Principal lacks authority over the target
    Forbidden,
    /// Malformed input rejected before any state change
    #[serde(rename = "VALIDATION_ERROR")]
    Validation,
    /// Missing or unusable credentials
    Unauthenticated,
    /// External payment gateway failure
    #[serde(rename = "PROVIDER_ERROR")]
    Provider,
    /// Anything unanticipated
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::Forbidden => "FORBIDDEN",
            Self::Validation => "VALIDATION_ERROR",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Provider => "PROVIDER_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorCode {
    /// Kind of failure this code represents, `None` for [`ErrorCode::Success`]
    pub fn kind(&self) -> Option<ErrorKind> {
        let kind = match self {
            Self::Success => return None,

            Self::BookingNotFound
            | Self::PackageBookingNotFound
            | Self::GuideNotFound
            | Self::TravelerNotFound
            | Self::PackageNotFound => ErrorKind::NotFound,

            Self::BookingNotPending
            | Self::BookingNotConfirmed
            | Self::PackageBookingAlreadyConfirmed
            | Self::BookingAlreadyPaid
            | Self::BookingNotPayable => ErrorKind::Conflict,

            Self::RoleRequired
            | Self::BookingLocationMismatch
            | Self::NotBookingOwner
            | Self::GuideNotApproved => ErrorKind::Forbidden,

            Self::NotAuthenticated | Self::TokenExpired | Self::TokenInvalid => {
                ErrorKind::Unauthenticated
            }

            Self::PaymentProviderError => ErrorKind::Provider,

            Self::InternalError | Self::DatabaseError => ErrorKind::Internal,

            Self::ValidationFailed
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::TourDateNotInFuture
            | Self::InvalidTourHours
            | Self::InvalidTravelerCount
            | Self::InvalidTimeSlot
            | Self::InvalidDateRange => ErrorKind::Validation,
        };
        Some(kind)
    }
}
