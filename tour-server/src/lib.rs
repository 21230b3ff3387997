//! TourVerse booking server
//!
//! Travelers request guided tours, guides in the same location accept
//! them, and completed tours are settled through a payment gateway.
//!
//! ```text
//! tour-server/src/
//! ├── booking/    # rate estimator + booking state machine
//! ├── payment/    # gateway trait, Razorpay client, settlement
//! ├── guides/     # search, availability, verification
//! ├── packages/   # tour package bookings
//! ├── db/         # SQLite pool, migrations, repositories
//! ├── auth/       # bearer-token principal
//! └── api/        # axum routes and handlers
//! ```

pub mod api;
pub mod auth;
pub mod booking;
pub mod config;
pub mod db;
pub mod error;
pub mod guides;
pub mod logger;
pub mod money;
pub mod packages;
pub mod payment;
pub mod state;

pub use auth::{JwtService, Principal};
pub use booking::{BookingError, BookingManager, RateEstimator};
pub use config::Config;
pub use db::DbService;
pub use payment::{PaymentGateway, RazorpayGateway, SettlementError, SettlementService};
pub use state::AppState;
