//! Data models
//!
//! Shared between tour-server and its API clients.
//! Enum columns use `#[cfg_attr(feature = "db", derive(sqlx::Type))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod availability;
pub mod booking;
pub mod guide;
pub mod package;
pub mod payment;
pub mod user;

// Re-exports
pub use availability::*;
pub use booking::*;
pub use guide::*;
pub use package::*;
pub use payment::*;
pub use user::*;
