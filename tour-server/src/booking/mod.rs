//! Booking lifecycle
//!
//! `PENDING -> CONFIRMED -> COMPLETED`, driven by three commands:
//! a traveler creates a booking (priced by [`RateEstimator`]), a guide in
//! the same location accepts it (re-priced at the guide's own rate), and
//! the traveler marks it completed. Payment is handled by
//! [`crate::payment::SettlementService`].
//!
//! Acceptance is the one contended write. It is a single conditional
//! `UPDATE ... WHERE status = 'PENDING'` inside its own transaction; the
//! caller whose update changes no row lost the race and gets
//! [`BookingError::NotPending`].

pub mod error;
pub mod estimator;

#[cfg(test)]
mod tests;

pub use error::{BookingError, BookingResult};
pub use estimator::RateEstimator;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use shared::models::{Booking, BookingCreate, BookingStatus};
use shared::util::{match_key, now_millis, snowflake_id};
use sqlx::SqlitePool;

use crate::db::bookings::{self, NewBooking};
use crate::db::{guides, users};
use crate::money::{round_money, to_minor_units};

/// Validate a create request against `today`; returns the trimmed location
pub fn validate_booking(input: &BookingCreate, today: NaiveDate) -> BookingResult<String> {
    if input.tour_date <= today {
        return Err(BookingError::TourDateNotInFuture);
    }
    if input.hours < 1 {
        return Err(BookingError::InvalidHours(input.hours));
    }
    let location = input.location.trim();
    if location.is_empty() {
        return Err(BookingError::BlankLocation);
    }
    Ok(location.to_string())
}

/// Owns the booking state machine
#[derive(Clone)]
pub struct BookingManager {
    pool: SqlitePool,
    estimator: RateEstimator,
}

impl BookingManager {
    pub fn new(pool: SqlitePool, estimator: RateEstimator) -> Self {
        Self { pool, estimator }
    }

    async fn load(&self, booking_id: i64) -> BookingResult<Booking> {
        bookings::find_by_id(&self.pool, booking_id)
            .await?
            .ok_or(BookingError::BookingNotFound(booking_id))
    }

    /// Create a PENDING booking priced by the rate estimator
    pub async fn create_booking(
        &self,
        traveler_id: i64,
        input: &BookingCreate,
    ) -> BookingResult<Booking> {
        let location = validate_booking(input, Utc::now().date_naive())?;

        users::find_traveler(&self.pool, traveler_id)
            .await?
            .ok_or(BookingError::TravelerNotFound(traveler_id))?;

        let location_key = match_key(&location);
        let estimate = self.estimator.estimate(&location_key, input.hours).await?;
        let total_amount_minor =
            to_minor_units(estimate).ok_or(BookingError::AmountOutOfRange)?;

        let id = snowflake_id();
        bookings::insert(
            &self.pool,
            &NewBooking {
                id,
                traveler_id,
                tour_date: input.tour_date,
                tour_time: input.tour_time,
                hours: input.hours,
                location: &location,
                location_key: &location_key,
                total_amount_minor,
                created_at: now_millis(),
            },
        )
        .await?;

        tracing::info!(
            booking_id = id,
            traveler_id,
            location = %location,
            total_amount = %estimate,
            "Booking created"
        );
        self.load(id).await
    }

    /// Guide claims a PENDING booking in their location.
    ///
    /// Checks, in order: guide exists, booking exists, booking is PENDING,
    /// locations match, guide is APPROVED. The final write re-checks
    /// PENDING atomically, so at most one guide ever wins.
    pub async fn accept_booking(&self, guide_id: i64, booking_id: i64) -> BookingResult<Booking> {
        let guide = guides::find_guide(&self.pool, guide_id)
            .await?
            .ok_or(BookingError::GuideNotFound(guide_id))?;
        let booking = self.load(booking_id).await?;

        if !booking.status.can_transition_to(BookingStatus::Confirmed) {
            return Err(BookingError::NotPending {
                booking_id,
                status: booking.status,
            });
        }
        if match_key(&booking.location) != guide.location_key {
            tracing::warn!(
                booking_id,
                guide_id,
                booking_location = %booking.location,
                guide_location = %guide.location,
                "Guide tried to accept booking outside their location"
            );
            return Err(BookingError::LocationMismatch {
                booking_id,
                booking_location: booking.location,
                guide_location: guide.location,
            });
        }
        if !guide.is_approved() {
            return Err(BookingError::GuideNotApproved(guide_id));
        }

        let total = round_money(guide.rate_per_hour * Decimal::from(booking.hours));
        let total_amount_minor = to_minor_units(total).ok_or(BookingError::AmountOutOfRange)?;

        let mut tx = self.pool.begin().await?;
        let changed =
            bookings::confirm_if_pending(&mut *tx, booking_id, guide_id, total_amount_minor)
                .await?;
        if changed != 1 {
            tx.rollback().await?;
            let status = bookings::find_by_id(&self.pool, booking_id)
                .await?
                .map(|b| b.status)
                .unwrap_or(booking.status);
            tracing::warn!(booking_id, guide_id, %status, "Booking acceptance lost race");
            return Err(BookingError::NotPending { booking_id, status });
        }
        let confirmed = bookings::find_by_id(&mut *tx, booking_id)
            .await?
            .ok_or(BookingError::BookingNotFound(booking_id))?;
        tx.commit().await?;

        tracing::info!(
            booking_id,
            guide_id,
            estimate = %booking.total_amount,
            total_amount = %confirmed.total_amount,
            "Booking accepted"
        );
        Ok(confirmed)
    }

    /// Owning traveler moves a CONFIRMED booking to COMPLETED
    pub async fn complete_booking(
        &self,
        traveler_id: i64,
        booking_id: i64,
    ) -> BookingResult<Booking> {
        let booking = self.load(booking_id).await?;

        if booking.traveler_id != traveler_id {
            tracing::warn!(booking_id, traveler_id, "Non-owner tried to complete booking");
            return Err(BookingError::NotOwner {
                booking_id,
                traveler_id,
            });
        }
        if !booking.status.can_transition_to(BookingStatus::Completed) {
            return Err(BookingError::NotConfirmed {
                booking_id,
                status: booking.status,
            });
        }

        let changed = bookings::complete_if_confirmed(&self.pool, booking_id, traveler_id).await?;
        if changed != 1 {
            let current = self.load(booking_id).await?;
            return Err(BookingError::NotConfirmed {
                booking_id,
                status: current.status,
            });
        }

        tracing::info!(booking_id, traveler_id, "Booking completed");
        self.load(booking_id).await
    }

    pub async fn bookings_for_traveler(&self, traveler_id: i64) -> BookingResult<Vec<Booking>> {
        Ok(bookings::list_by_traveler(&self.pool, traveler_id).await?)
    }

    /// PENDING bookings in the guide's location
    pub async fn available_bookings_for_guide(&self, guide_id: i64) -> BookingResult<Vec<Booking>> {
        let guide = guides::find_guide(&self.pool, guide_id)
            .await?
            .ok_or(BookingError::GuideNotFound(guide_id))?;
        Ok(bookings::list_pending_by_location(&self.pool, &guide.location_key).await?)
    }

    /// Bookings this guide has accepted
    pub async fn bookings_for_guide(&self, guide_id: i64) -> BookingResult<Vec<Booking>> {
        Ok(bookings::list_by_guide(&self.pool, guide_id).await?)
    }
}
