//! Unified error system for TourVerse services
//!
//! - [`ErrorCode`]: Standardized numeric error codes
//! - [`ErrorKind`]: Stable failure taxonomy (NotFound, Conflict, Forbidden, ...)
//! - [`ErrorCategory`]: Classification of codes by domain range
//! - [`AppError`]: Error with code, message, and details, renderable by axum
//! - [`ErrorBody`]: JSON body written for a failed request
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorKind};
//!
//! let err = AppError::new(ErrorCode::BookingNotPending).with_detail("booking_id", 42);
//! assert_eq!(err.kind(), ErrorKind::Conflict);
//! ```

mod category;
mod codes;
mod http;
mod kind;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use kind::ErrorKind;
pub use types::{AppError, AppResult, Details, ErrorBody};
