//! Booking repository
//!
//! Status changes are compare-and-swap writes: each `UPDATE` carries the
//! expected current status in its `WHERE` clause and reports the number of
//! rows it changed. Callers treat anything but 1 as a lost race.

use chrono::{NaiveDate, NaiveTime};
use shared::models::{Booking, BookingStatus, PaymentStatus};
use sqlx::{SqliteExecutor, SqlitePool};

use crate::money::from_minor_units;

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: i64,
    traveler_id: i64,
    traveler_name: String,
    guide_id: Option<i64>,
    guide_name: Option<String>,
    tour_date: NaiveDate,
    tour_time: NaiveTime,
    hours: i32,
    location: String,
    total_amount_minor: i64,
    status: BookingStatus,
    payment_status: PaymentStatus,
    razorpay_order_id: Option<String>,
    created_at: i64,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            traveler_id: row.traveler_id,
            traveler_name: row.traveler_name,
            guide_id: row.guide_id,
            guide_name: row.guide_name,
            tour_date: row.tour_date,
            tour_time: row.tour_time,
            hours: row.hours,
            location: row.location,
            total_amount: from_minor_units(row.total_amount_minor),
            status: row.status,
            payment_status: row.payment_status,
            razorpay_order_id: row.razorpay_order_id,
            created_at: row.created_at,
        }
    }
}

const BOOKING_SELECT: &str = "SELECT b.id, b.traveler_id, t.name AS traveler_name, \
    b.guide_id, g.name AS guide_name, b.tour_date, b.tour_time, b.hours, b.location, \
    b.total_amount_minor, b.status, b.payment_status, b.razorpay_order_id, b.created_at \
    FROM bookings b \
    JOIN users t ON t.id = b.traveler_id \
    LEFT JOIN users g ON g.id = b.guide_id";

pub struct NewBooking<'a> {
    pub id: i64,
    pub traveler_id: i64,
    pub tour_date: NaiveDate,
    pub tour_time: NaiveTime,
    pub hours: i32,
    pub location: &'a str,
    pub location_key: &'a str,
    pub total_amount_minor: i64,
    pub created_at: i64,
}

/// Insert a PENDING, UNPAID booking with no guide
pub async fn insert(pool: &SqlitePool, booking: &NewBooking<'_>) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO bookings (id, traveler_id, guide_id, tour_date, tour_time, hours, location, location_key, total_amount_minor, status, payment_status, created_at)
         VALUES (?, ?, NULL, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(booking.id)
    .bind(booking.traveler_id)
    .bind(booking.tour_date)
    .bind(booking.tour_time)
    .bind(booking.hours)
    .bind(booking.location)
    .bind(booking.location_key)
    .bind(booking.total_amount_minor)
    .bind(BookingStatus::Pending)
    .bind(PaymentStatus::Unpaid)
    .bind(booking.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_id(
    executor: impl SqliteExecutor<'_>,
    id: i64,
) -> Result<Option<Booking>, sqlx::Error> {
    let sql = format!("{BOOKING_SELECT} WHERE b.id = ?");
    let row = sqlx::query_as::<_, BookingRow>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row.map(Booking::from))
}

pub async fn list_by_traveler(
    pool: &SqlitePool,
    traveler_id: i64,
) -> Result<Vec<Booking>, sqlx::Error> {
    let sql = format!("{BOOKING_SELECT} WHERE b.traveler_id = ? ORDER BY b.created_at DESC, b.id DESC");
    let rows = sqlx::query_as::<_, BookingRow>(&sql)
        .bind(traveler_id)
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(Booking::from).collect())
}

pub async fn list_by_guide(pool: &SqlitePool, guide_id: i64) -> Result<Vec<Booking>, sqlx::Error> {
    let sql = format!("{BOOKING_SELECT} WHERE b.guide_id = ? ORDER BY b.created_at DESC, b.id DESC");
    let rows = sqlx::query_as::<_, BookingRow>(&sql)
        .bind(guide_id)
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(Booking::from).collect())
}

/// PENDING bookings whose normalized location equals `location_key`
pub async fn list_pending_by_location(
    pool: &SqlitePool,
    location_key: &str,
) -> Result<Vec<Booking>, sqlx::Error> {
    let sql = format!(
        "{BOOKING_SELECT} WHERE b.status = ? AND b.location_key = ? ORDER BY b.created_at DESC, b.id DESC"
    );
    let rows = sqlx::query_as::<_, BookingRow>(&sql)
        .bind(BookingStatus::Pending)
        .bind(location_key)
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(Booking::from).collect())
}

/// PENDING -> CONFIRMED, assigning the guide and the re-priced total.
///
/// Returns the number of rows changed: 1 for the winning acceptance,
/// 0 if the booking was no longer PENDING when the write ran.
pub async fn confirm_if_pending(
    executor: impl SqliteExecutor<'_>,
    id: i64,
    guide_id: i64,
    total_amount_minor: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE bookings SET guide_id = ?, status = ?, total_amount_minor = ?
         WHERE id = ? AND status = ?",
    )
    .bind(guide_id)
    .bind(BookingStatus::Confirmed)
    .bind(total_amount_minor)
    .bind(id)
    .bind(BookingStatus::Pending)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

/// CONFIRMED -> COMPLETED for the owning traveler
pub async fn complete_if_confirmed(
    executor: impl SqliteExecutor<'_>,
    id: i64,
    traveler_id: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE bookings SET status = ?
         WHERE id = ? AND traveler_id = ? AND status = ?",
    )
    .bind(BookingStatus::Completed)
    .bind(id)
    .bind(traveler_id)
    .bind(BookingStatus::Confirmed)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

/// Record the gateway order and flip UNPAID -> PAID on a COMPLETED booking
pub async fn mark_paid(
    executor: impl SqliteExecutor<'_>,
    id: i64,
    razorpay_order_id: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE bookings SET razorpay_order_id = ?, payment_status = ?
         WHERE id = ? AND status = ? AND payment_status = ?",
    )
    .bind(razorpay_order_id)
    .bind(PaymentStatus::Paid)
    .bind(id)
    .bind(BookingStatus::Completed)
    .bind(PaymentStatus::Unpaid)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
