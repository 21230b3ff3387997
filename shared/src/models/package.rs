//! Tour package booking models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PackageBookingStatus {
    PendingPayment,
    Confirmed,
    Canceled,
}

/// Tour package (catalog managed elsewhere, read-only here)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourPackage {
    pub id: i64,
    pub title: String,
    pub location: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageBooking {
    pub id: i64,
    pub traveler_id: i64,
    pub package_id: i64,
    pub package_title: String,
    pub travel_date: NaiveDate,
    pub number_of_travelers: i32,
    /// Package price x travelers
    pub total_amount: Decimal,
    pub status: PackageBookingStatus,
    pub razorpay_order_id: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageBookingCreate {
    pub package_id: i64,
    pub travel_date: NaiveDate,
    pub number_of_travelers: i32,
}
