//! Tour packages and package bookings

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::{PackageBooking, PackageBookingStatus, TourPackage};
use shared::util::{now_millis, snowflake_id};
use sqlx::{SqliteExecutor, SqlitePool};

use super::decode_error;
use crate::money::{from_minor_units, to_minor_units};

#[derive(sqlx::FromRow)]
struct PackageRow {
    id: i64,
    title: String,
    location: String,
    price_minor: i64,
}

#[derive(sqlx::FromRow)]
struct PackageBookingRow {
    id: i64,
    traveler_id: i64,
    package_id: i64,
    package_title: String,
    travel_date: NaiveDate,
    number_of_travelers: i32,
    total_amount_minor: i64,
    status: PackageBookingStatus,
    razorpay_order_id: Option<String>,
    created_at: i64,
}

impl From<PackageBookingRow> for PackageBooking {
    fn from(row: PackageBookingRow) -> Self {
        PackageBooking {
            id: row.id,
            traveler_id: row.traveler_id,
            package_id: row.package_id,
            package_title: row.package_title,
            travel_date: row.travel_date,
            number_of_travelers: row.number_of_travelers,
            total_amount: from_minor_units(row.total_amount_minor),
            status: row.status,
            razorpay_order_id: row.razorpay_order_id,
            created_at: row.created_at,
        }
    }
}

const PACKAGE_BOOKING_SELECT: &str = "SELECT pb.id, pb.traveler_id, pb.package_id, \
    p.title AS package_title, pb.travel_date, pb.number_of_travelers, pb.total_amount_minor, \
    pb.status, pb.razorpay_order_id, pb.created_at \
    FROM package_bookings pb JOIN tour_packages p ON p.id = pb.package_id";

pub async fn find_package(pool: &SqlitePool, id: i64) -> Result<Option<TourPackage>, sqlx::Error> {
    let row = sqlx::query_as::<_, PackageRow>(
        "SELECT id, title, location, price_minor FROM tour_packages WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(|r| TourPackage {
        id: r.id,
        title: r.title,
        location: r.location,
        price: from_minor_units(r.price_minor),
    }))
}

/// Catalog write used by the package service
pub async fn insert_package(
    pool: &SqlitePool,
    title: &str,
    location: &str,
    price: Decimal,
) -> Result<i64, sqlx::Error> {
    let id = snowflake_id();
    let price_minor =
        to_minor_units(price).ok_or_else(|| decode_error("price_minor", "price out of range"))?;
    sqlx::query(
        "INSERT INTO tour_packages (id, title, location, price_minor, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(title)
    .bind(location)
    .bind(price_minor)
    .bind(now_millis())
    .execute(pool)
    .await?;
    Ok(id)
}

pub struct NewPackageBooking {
    pub id: i64,
    pub traveler_id: i64,
    pub package_id: i64,
    pub travel_date: NaiveDate,
    pub number_of_travelers: i32,
    pub total_amount_minor: i64,
    pub created_at: i64,
}

pub async fn insert_booking(
    pool: &SqlitePool,
    booking: &NewPackageBooking,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO package_bookings (id, traveler_id, package_id, travel_date, number_of_travelers, total_amount_minor, status, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(booking.id)
    .bind(booking.traveler_id)
    .bind(booking.package_id)
    .bind(booking.travel_date)
    .bind(booking.number_of_travelers)
    .bind(booking.total_amount_minor)
    .bind(PackageBookingStatus::PendingPayment)
    .bind(booking.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_booking(
    executor: impl SqliteExecutor<'_>,
    id: i64,
) -> Result<Option<PackageBooking>, sqlx::Error> {
    let sql = format!("{PACKAGE_BOOKING_SELECT} WHERE pb.id = ?");
    let row = sqlx::query_as::<_, PackageBookingRow>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row.map(PackageBooking::from))
}

pub async fn list_bookings_by_traveler(
    pool: &SqlitePool,
    traveler_id: i64,
) -> Result<Vec<PackageBooking>, sqlx::Error> {
    let sql = format!(
        "{PACKAGE_BOOKING_SELECT} WHERE pb.traveler_id = ? ORDER BY pb.created_at DESC, pb.id DESC"
    );
    let rows = sqlx::query_as::<_, PackageBookingRow>(&sql)
        .bind(traveler_id)
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(PackageBooking::from).collect())
}

/// PENDING_PAYMENT -> CONFIRMED with the gateway order attached
pub async fn confirm_with_order(
    executor: impl SqliteExecutor<'_>,
    id: i64,
    razorpay_order_id: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE package_bookings SET razorpay_order_id = ?, status = ?
         WHERE id = ? AND status = ?",
    )
    .bind(razorpay_order_id)
    .bind(PackageBookingStatus::Confirmed)
    .bind(id)
    .bind(PackageBookingStatus::PendingPayment)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
