//! Numeric error codes
//!
//! The thousands digit names the area a code belongs to (see
//! [`super::ErrorCategory`]). Codes are part of the wire contract: never
//! renumber one, only add.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! error_codes {
    ($( $(#[$doc:meta])* $name:ident = $value:literal => $message:literal, )*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(into = "u16", try_from = "u16")]
        #[repr(u16)]
        pub enum ErrorCode {
            $( $(#[$doc])* $name = $value, )*
        }

        impl ErrorCode {
            /// Every defined code, in declaration order
            pub const ALL: &'static [ErrorCode] = &[$(ErrorCode::$name),*];

            /// Default English text sent when no more specific message exists
            pub const fn message(&self) -> &'static str {
                match self {
                    $( ErrorCode::$name => $message, )*
                }
            }
        }

        impl TryFrom<u16> for ErrorCode {
            type Error = InvalidErrorCode;

            fn try_from(value: u16) -> Result<Self, Self::Error> {
                match value {
                    $( $value => Ok(ErrorCode::$name), )*
                    other => Err(InvalidErrorCode(other)),
                }
            }
        }
    };
}

error_codes! {
    Success = 0 => "Operation completed successfully",
    ValidationFailed = 2 => "Validation failed",
    /// A mandatory text field was blank after trimming
    RequiredField = 7 => "Required field is missing",
    /// Money that does not fit the minor-unit column
    ValueOutOfRange = 8 => "Value is out of range",

    NotAuthenticated = 1001 => "User is not authenticated",
    TokenExpired = 1003 => "Authentication token has expired",
    TokenInvalid = 1004 => "Authentication token is invalid",

    RoleRequired = 2002 => "Specific role is required",

    BookingNotFound = 4001 => "Booking not found",
    /// Someone else accepted it first, or it moved past PENDING
    BookingNotPending = 4002 => "This booking has already been accepted or is no longer pending",
    BookingNotConfirmed = 4003 => "Only confirmed bookings can be marked as completed",
    BookingLocationMismatch = 4004 => "This booking is not in your location",
    NotBookingOwner = 4005 => "You are not authorized to act on this booking",
    TourDateNotInFuture = 4006 => "Tour date must be in the future",
    InvalidTourHours = 4007 => "Tour must be at least 1 hour long",
    GuideNotApproved = 4008 => "Guide is not approved to accept bookings",

    PackageBookingNotFound = 4101 => "Package booking not found",
    PackageBookingAlreadyConfirmed = 4102 => "Package booking is already confirmed",
    InvalidTravelerCount = 4103 => "Number of travelers must be at least 1",

    /// Gateway unreachable, timed out, or answered non-2xx
    PaymentProviderError = 5001 => "Payment provider error",
    BookingAlreadyPaid = 5002 => "This booking has already been paid for",
    BookingNotPayable = 5003 => "Payment can only be made for completed bookings",

    GuideNotFound = 6001 => "Guide not found",
    TravelerNotFound = 6002 => "Traveler not found",
    PackageNotFound = 6101 => "Tour package not found",
    InvalidTimeSlot = 6201 => "Time slots must use HH:MM format",
    InvalidDateRange = 6202 => "Start date must not be after end date",

    InternalError = 9001 => "Internal server error",
    DatabaseError = 9002 => "Database error",
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.code(), f)
    }
}

/// A `u16` that names no [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);
