//! Tour package bookings
//!
//! Packages themselves are catalog data maintained elsewhere; this module
//! only books them. A package booking starts in `PENDING_PAYMENT` and is
//! confirmed by [`crate::payment::SettlementService`] once a gateway order
//! exists.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode, ErrorKind};
use shared::models::{PackageBooking, PackageBookingCreate};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::db::packages::{self, NewPackageBooking};
use crate::db::users;
use crate::money::{round_money, to_minor_units};

#[derive(Debug, Error)]
pub enum PackageError {
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Traveler not found: {0}")]
    TravelerNotFound(i64),

    #[error("Tour package not found: {0}")]
    PackageNotFound(i64),

    #[error("Number of travelers must be at least 1, got {0}")]
    InvalidTravelerCount(i32),

    #[error("Travel date must be in the future")]
    TravelDateNotInFuture,

    #[error("Amount out of range")]
    AmountOutOfRange,
}

impl PackageError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Storage(_) => ErrorCode::InternalError,
            Self::TravelerNotFound(_) => ErrorCode::TravelerNotFound,
            Self::PackageNotFound(_) => ErrorCode::PackageNotFound,
            Self::InvalidTravelerCount(_) => ErrorCode::InvalidTravelerCount,
            Self::TravelDateNotInFuture => ErrorCode::TourDateNotInFuture,
            Self::AmountOutOfRange => ErrorCode::ValueOutOfRange,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.code().kind().unwrap_or(ErrorKind::Internal)
    }
}

impl From<PackageError> for AppError {
    fn from(err: PackageError) -> Self {
        let code = err.code();
        match err {
            PackageError::Storage(e) => {
                tracing::error!(error = %e, "Package booking storage error");
                AppError::new(code)
            }
            PackageError::TravelerNotFound(id) | PackageError::PackageNotFound(id) => {
                AppError::with_message(code, err.to_string()).with_detail("id", id)
            }
            _ => AppError::with_message(code, err.to_string()),
        }
    }
}

pub type PackageResult<T> = Result<T, PackageError>;

fn validate(input: &PackageBookingCreate, today: NaiveDate) -> PackageResult<()> {
    if input.number_of_travelers < 1 {
        return Err(PackageError::InvalidTravelerCount(input.number_of_travelers));
    }
    if input.travel_date <= today {
        return Err(PackageError::TravelDateNotInFuture);
    }
    Ok(())
}

#[derive(Clone)]
pub struct PackageService {
    pool: SqlitePool,
}

impl PackageService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Book a package for `number_of_travelers`; total is price x travelers
    pub async fn create_package_booking(
        &self,
        traveler_id: i64,
        input: &PackageBookingCreate,
    ) -> PackageResult<PackageBooking> {
        validate(input, Utc::now().date_naive())?;

        users::find_traveler(&self.pool, traveler_id)
            .await?
            .ok_or(PackageError::TravelerNotFound(traveler_id))?;
        let package = packages::find_package(&self.pool, input.package_id)
            .await?
            .ok_or(PackageError::PackageNotFound(input.package_id))?;

        let total = round_money(package.price * Decimal::from(input.number_of_travelers));
        let total_amount_minor = to_minor_units(total).ok_or(PackageError::AmountOutOfRange)?;

        let id = snowflake_id();
        packages::insert_booking(
            &self.pool,
            &NewPackageBooking {
                id,
                traveler_id,
                package_id: package.id,
                travel_date: input.travel_date,
                number_of_travelers: input.number_of_travelers,
                total_amount_minor,
                created_at: now_millis(),
            },
        )
        .await?;

        tracing::info!(
            package_booking_id = id,
            traveler_id,
            package_id = package.id,
            total_amount = %total,
            "Package booking created"
        );
        packages::find_booking(&self.pool, id)
            .await?
            .ok_or(PackageError::PackageNotFound(input.package_id))
    }

    pub async fn bookings_for_traveler(&self, traveler_id: i64) -> PackageResult<Vec<PackageBooking>> {
        Ok(packages::list_bookings_by_traveler(&self.pool, traveler_id).await?)
    }
}
